//! Projection benchmarks.
//!
//! Measures resolving and projecting a generated WebAPI with a varying
//! number of endpoints. Every operation's payload links to a declared
//! shape, so link resolution is part of the measured cost.
//!
//! Run with: cargo bench -p apigraph-projector --bench projection

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};

use apigraph_graph::ApiGraph;
use apigraph_projector::{NodeKind, Projector};

/// Generate an expanded model with N endpoints, each with one POST
/// operation whose payload links to a shared declared shape.
fn generate_model(endpoint_count: usize) -> Value {
    let endpoints: Vec<Value> = (0..endpoint_count)
        .map(|i| {
            let base = format!("#/api/resource{}", i);
            json!({
                "@id": base,
                "@type": ["apiContract:EndPoint"],
                "apiContract:path": format!("/resource{}/{{id}}", i),
                "apiContract:parameter": [{
                    "@id": format!("{}/parameter/id", base),
                    "core:name": "id",
                    "apiContract:required": true,
                    "shapes:schema": [{
                        "@id": format!("{}/parameter/id/schema", base),
                        "@type": ["shapes:ScalarShape"],
                        "shacl:datatype": [{ "@id": "http://www.w3.org/2001/XMLSchema#string" }]
                    }]
                }],
                "apiContract:supportedOperation": [{
                    "@id": format!("{}/post", base),
                    "@type": ["apiContract:Operation"],
                    "apiContract:method": "post",
                    "apiContract:expects": [{
                        "@id": format!("{}/post/request", base),
                        "@type": ["apiContract:Request"],
                        "apiContract:payload": [{
                            "@id": format!("{}/post/request/json", base),
                            "core:mediaType": "application/json",
                            "shapes:schema": [{
                                "@id": format!("{}/post/request/json/schema", base),
                                "@type": ["shacl:NodeShape"],
                                "doc:link-target": [{ "@id": "#/declares/Item" }]
                            }]
                        }]
                    }]
                }]
            })
        })
        .collect();

    json!([{
        "@id": "amf://id",
        "@context": {
            "doc": "http://a.ml/vocabularies/document#",
            "core": "http://a.ml/vocabularies/core#",
            "apiContract": "http://a.ml/vocabularies/apiContract#",
            "shacl": "http://www.w3.org/ns/shacl#",
            "shapes": "http://a.ml/vocabularies/shapes#"
        },
        "@type": ["doc:Document"],
        "doc:declares": [{
            "@id": "#/declares/Item",
            "@type": ["shacl:NodeShape", "shapes:AnyShape"],
            "shacl:name": "Item",
            "shacl:property": [
                {
                    "@id": "#/declares/Item/property/name",
                    "shacl:path": [{ "@id": "http://a.ml/vocabularies/data#name" }],
                    "shapes:range": [{ "@id": "#/declares/Item/property/name/range", "@type": ["shapes:ScalarShape"] }]
                },
                {
                    "@id": "#/declares/Item/property/tags",
                    "shacl:path": [{ "@id": "http://a.ml/vocabularies/data#tags" }],
                    "shapes:range": [{
                        "@id": "#/declares/Item/property/tags/range",
                        "@type": ["shapes:ArrayShape"],
                        "shapes:items": [{ "@id": "#/declares/Item/property/tags/items", "@type": ["shapes:ScalarShape"] }]
                    }]
                }
            ]
        }],
        "doc:encodes": [{
            "@id": "#/api",
            "@type": ["apiContract:WebAPI"],
            "core:name": "Benchmark API",
            "apiContract:endpoint": endpoints
        }]
    }])
}

fn bench_web_api_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("web_api_projection");

    for count in [10, 50, 200] {
        let model = generate_model(count);
        group.bench_with_input(BenchmarkId::new("endpoints", count), &model, |b, model| {
            b.iter(|| {
                // A fresh graph per iteration so resolution is not cached.
                let graph = ApiGraph::from_value(model.clone()).expect("model loads");
                let projected = Projector::new(&graph).web_api();
                black_box(projected)
            })
        });
    }

    group.finish();
}

fn bench_cached_projection(c: &mut Criterion) {
    let graph = ApiGraph::from_value(generate_model(50)).expect("model loads");
    let projector = Projector::new(&graph);
    let api = graph.api().expect("model has an API");

    c.bench_function("project_cached_api_50", |b| {
        b.iter(|| black_box(projector.project(api, Some(NodeKind::WebApi))))
    });
}

criterion_group!(benches, bench_web_api_projection, bench_cached_projection);
criterion_main!(benches);
