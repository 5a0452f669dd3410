// End-to-end runtime smoke test (headless)
// - Runs clonedeck::app::run against a fixture with CLONEDECK_TEST_HEADLESS=1.
// - The headless loop ends by itself once the instance and images have loaded.

use std::sync::Arc;
use std::time::Duration;

use clonedeck::app::{RunOptions, run};
use clonedeck::sources::{DataSource, Fixture};
use clonedeck::theme::Settings;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_loads_fixture_and_exits() {
    unsafe {
        std::env::set_var("CLONEDECK_TEST_HEADLESS", "1");
    }
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("fixture.json");
    std::fs::write(
        &path,
        r#"{
            "disks": [{"id": 1, "label": "sda", "size": 1024}],
            "configs": [{"id": 5, "label": "Boot", "devices": {"sda": {"disk_id": 1}}}],
            "images": [{"id": "linode/debian12", "label": "Debian 12"}]
        }"#,
    )
    .expect("write fixture");
    let fixture = Fixture::load(&path).expect("fixture parses");
    assert_eq!(fixture.configs[0].disk_ids(), vec![1]);

    let opts = RunOptions {
        instance_id: Some(1),
        source: DataSource::Fixture(Arc::new(fixture)),
        settings: Settings::default(),
        page_size: 25,
    };
    let res = tokio::time::timeout(Duration::from_secs(10), run(opts))
        .await
        .expect("headless run finishes");
    if let Err(e) = res {
        panic!("app::run returned error: {e:?}");
    }
}
