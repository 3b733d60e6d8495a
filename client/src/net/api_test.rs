use futures::executor::block_on;

use super::*;

#[test]
fn reads_are_unavailable_outside_the_browser() {
    let config = ApiConfig::default();
    assert_eq!(block_on(fetch_bombona(&config, 1)), Err(ApiError::Unavailable));
    assert_eq!(block_on(fetch_tag_reads(&config)), Err(ApiError::Unavailable));
    assert_eq!(block_on(fetch_graph(&config)), Err(ApiError::Unavailable));
}

#[test]
fn mutations_are_unavailable_outside_the_browser() {
    let config = ApiConfig::default();
    assert_eq!(block_on(checkout(&config, 1, "Rota")), Err(ApiError::Unavailable));
    assert_eq!(block_on(unlink_rfid(&config, 1)), Err(ApiError::Unavailable));
    assert_eq!(block_on(assign_rfid_by_uid(&config, "E2", 3)), Err(ApiError::Unavailable));
}
