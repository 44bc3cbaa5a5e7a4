mod common;

use bytes::Bytes;
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use hibp_range_client::{BreachLookupClient, ClientConfig, Transport, TransportError};
use hibp_range_client::{find_count, sha1_hex};

use common::{generate_random_passwords, generate_range_body};

/// Serves the same body for every prefix, so only hashing and parsing are measured.
struct StaticTransport {
    body: Bytes,
}

impl Transport for StaticTransport {
    async fn fetch(&self, _url: &str) -> Result<Option<Bytes>, TransportError> {
        Ok(Some(self.body.clone()))
    }
}

fn bench_hash(c: &mut Criterion) {
    let passwords = generate_random_passwords(1000);

    c.bench_function("sha1_hex_1k", |b| {
        b.iter(|| {
            for password in &passwords {
                black_box(sha1_hex(black_box(password)));
            }
        })
    });
}

fn bench_find_count(c: &mut Criterion) {
    let digest = sha1_hex("password");
    let hit = generate_range_body(2000, Some(digest.suffix()));
    let miss = generate_range_body(2000, None);

    let mut group = c.benchmark_group("find_count_2000_lines");
    group.bench_function("hit_last_line", |b| {
        b.iter(|| find_count(black_box(hit.as_bytes()), digest.suffix()))
    });
    group.bench_function("miss", |b| {
        b.iter(|| find_count(black_box(miss.as_bytes()), digest.suffix()))
    });
    group.finish();
}

fn bench_filter_pwned(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_multi_thread().enable_all().build().unwrap();
    let passwords = generate_random_passwords(1000);
    let transport = StaticTransport { body: Bytes::from(generate_range_body(800, None)) };
    let client = BreachLookupClient::with_transport(ClientConfig::default(), transport);
    let client = &client;

    c.bench_function("filter_pwned_1k", |b| {
        b.to_async(&rt).iter_batched(
            || passwords.clone(),
            |passwords| async move { black_box(client.filter_pwned(passwords).await.unwrap()) },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_hash, bench_find_count, bench_filter_pwned);
criterion_main!(benches);
