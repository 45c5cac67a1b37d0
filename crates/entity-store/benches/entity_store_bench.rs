use criterion::{Criterion, criterion_group, criterion_main};
use serde::{Deserialize, Serialize};

use entity_store::{Entity, EntityId, EntityStore, MemoryStore};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Record {
    #[serde(default)]
    id: Option<EntityId>,
    label: String,
    count: i32,
}

impl Entity for Record {
    const KIND: &'static str = "bench_record";

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

fn make_record(n: i32) -> Record {
    Record {
        id: None,
        label: format!("record-{n}"),
        count: n,
    }
}

fn bench_create(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("entity_store/create", |b| {
        b.iter(|| {
            rt.block_on(async {
                let store = MemoryStore::new();
                store.create(make_record(1)).await.unwrap();
            });
        });
    });
}

fn bench_list_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let store = MemoryStore::new();
    rt.block_on(async {
        for n in 0..1000 {
            store.create(make_record(n)).await.unwrap();
        }
    });

    c.bench_function("entity_store/list_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                let all = store.list().await.unwrap();
                assert_eq!(all.len(), 1000);
            });
        });
    });
}

fn bench_get(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let store = MemoryStore::new();
    let stored = rt.block_on(async { store.create(make_record(1)).await.unwrap() });
    let id = stored.id.unwrap();

    c.bench_function("entity_store/get", |b| {
        b.iter(|| {
            rt.block_on(async {
                store.get(id).await.unwrap().unwrap();
            });
        });
    });
}

criterion_group!(benches, bench_create, bench_list_1000, bench_get);
criterion_main!(benches);
