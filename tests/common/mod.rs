use std::sync;

use forward_list::ForwardList;

static INIT_TESTS: sync::Once = sync::Once::new();

pub fn init_logging() {
    INIT_TESTS.call_once(|| {
        pretty_env_logger::formatted_builder()
            .is_test(true)
            .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
            .init();
    });
}

/// Snapshot of a list's contents in traversal order.
#[allow(dead_code)]
pub fn contents<T: Clone>(list: &ForwardList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

/// Number of elements reached by walking a read-only cursor from the front.
#[allow(dead_code)]
pub fn walked_len<T>(list: &ForwardList<T>) -> usize {
    let mut cursor = list.cursor_front();
    let mut count = 0;
    while !cursor.is_end() {
        count += 1;
        if cursor.move_next().is_err() {
            break;
        }
    }
    count
}
