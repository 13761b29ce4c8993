use std::{fs, path::PathBuf};

use cardscout_client::{FindingClient, FindingConfig};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

pub fn client_for(base_url: &str) -> FindingClient {
    FindingClient::new(FindingConfig { app_id: "test-app".into(), base_url: base_url.to_string(), ..Default::default() })
        .unwrap()
}
