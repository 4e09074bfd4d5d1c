#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use geoblock_wasm::{adjacent, is_valid, neighbors, with_max_precision};

#[wasm_bindgen_test]
fn can_validate_geocodes() {
    geoblock_wasm::start();

    assert!(is_valid("b0c1", 4));
    assert!(!is_valid("a1", 1));
    assert_eq!(with_max_precision("U33DC1V", 5), "u33dc");
}

#[wasm_bindgen_test]
fn can_step_and_list_neighbors() {
    geoblock_wasm::start();

    assert_eq!(adjacent("b", "n").unwrap(), "0");
    assert!(adjacent("b", "").is_err());

    let cells = neighbors("b").unwrap();
    assert_eq!(cells.len(), 8);
    assert_eq!(cells[0], "0");
}
