//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use wasm_bindgen_test::*;

use wasm_bindgen::JsCast;

use crushscript_runtime::{
    js_constructor_int32_array, log, number, Console, JsRandom, Process, Runtime,
};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_typed_array_copies_to_host() {
    let mut arr = js_constructor_int32_array(3).unwrap();
    arr[0] = 1;
    arr[2] = -5;
    let host = arr.to_typed_array();
    assert_eq!(host.length(), 3);
    assert_eq!(host.to_vec(), vec![1, 0, -5]);
    assert!(host.is_instance_of::<js_sys::Int32Array>());
}

#[wasm_bindgen_test]
fn test_injected_writer_receives_output() {
    let mut console = Console::new(Vec::new());
    console.log(42);
    assert_eq!(console.into_inner(), b"42\n");
}

#[wasm_bindgen_test]
fn test_runtime_with_injected_writer() {
    let mut rt = Runtime::from_parts(
        Process::setargs(["a"]),
        JsRandom::with_seed(1),
        Console::new(Vec::new()),
    );
    rt.log("hi");
    rt.log(7);
    assert_eq!(rt.into_console().into_inner(), b"hi\n7\n");
}

#[wasm_bindgen_test]
fn test_console_routes_to_host() {
    log(number("17"));
    log("from wasm");
}

#[wasm_bindgen_test]
fn test_clock_seeded_random() {
    let mut rng = JsRandom::from_clock();
    let r = rng.random();
    assert!((0.0..1.0).contains(&r));
}
