//! ONNX fixtures for tests.
//!
//! Writes the protobuf encoding of `Y = X·W + B` directly, so tests get a real
//! graph without a Python export step. `X` is `[1, width]` float, `W` is
//! `[width, 1]`, `B` is `[1]`, `Y` is `[1, 1]`.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// ONNX `TensorProto.DataType.FLOAT`
const FLOAT: i64 = 1;

/// Graph that ignores its input and always predicts `value`
pub fn constant_regressor(width: usize, value: f32) -> Vec<u8> {
    linear_regressor(&vec![0.0; width], value)
}

/// Linear graph over `weights.len()` input columns
pub fn linear_regressor(weights: &[f32], bias: f32) -> Vec<u8> {
    let width = weights.len() as i64;

    let mut graph = Vec::new();
    message(&mut graph, 1, &node(&["X", "W"], &["XW"], "MatMul"));
    message(&mut graph, 1, &node(&["XW", "B"], &["Y"], "Add"));
    message(&mut graph, 2, b"linear_regressor");
    message(&mut graph, 5, &float_tensor("W", &[width, 1], weights));
    message(&mut graph, 5, &float_tensor("B", &[1], &[bias]));
    message(&mut graph, 11, &float_value_info("X", &[1, width]));
    message(&mut graph, 12, &float_value_info("Y", &[1, 1]));

    let mut opset = Vec::new();
    int(&mut opset, 2, 13);

    let mut model = Vec::new();
    int(&mut model, 1, 7);
    message(&mut model, 2, b"quality-predictor-tests");
    message(&mut model, 7, &graph);
    message(&mut model, 8, &opset);
    model
}

/// Write `bytes` to `dir/name` and return the path
pub fn write_model(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

fn node(inputs: &[&str], outputs: &[&str], op_type: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    for input in inputs {
        message(&mut buf, 1, input.as_bytes());
    }
    for output in outputs {
        message(&mut buf, 2, output.as_bytes());
    }
    message(&mut buf, 4, op_type.as_bytes());
    buf
}

fn float_tensor(name: &str, dims: &[i64], data: &[f32]) -> Vec<u8> {
    let mut buf = Vec::new();
    for &dim in dims {
        int(&mut buf, 1, dim);
    }
    int(&mut buf, 2, FLOAT);
    message(&mut buf, 8, name.as_bytes());
    let raw: Vec<u8> = data.iter().flat_map(|v| v.to_le_bytes()).collect();
    message(&mut buf, 9, &raw);
    buf
}

fn float_value_info(name: &str, dims: &[i64]) -> Vec<u8> {
    let mut shape = Vec::new();
    for &dim in dims {
        let mut dimension = Vec::new();
        int(&mut dimension, 1, dim);
        message(&mut shape, 1, &dimension);
    }

    let mut tensor_type = Vec::new();
    int(&mut tensor_type, 1, FLOAT);
    message(&mut tensor_type, 2, &shape);

    let mut type_proto = Vec::new();
    message(&mut type_proto, 1, &tensor_type);

    let mut buf = Vec::new();
    message(&mut buf, 1, name.as_bytes());
    message(&mut buf, 2, &type_proto);
    buf
}

fn varint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

fn int(buf: &mut Vec<u8>, field: u64, value: i64) {
    varint(buf, field << 3);
    varint(buf, value as u64);
}

fn message(buf: &mut Vec<u8>, field: u64, bytes: &[u8]) {
    varint(buf, (field << 3) | 2);
    varint(buf, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

