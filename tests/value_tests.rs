use pgvector::{HalfVector, SparseVector, Vector, VectorError, VectorLiteral};
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

#[test]
fn test_vector_accessors() {
    let vector = Vector::from(vec![1.0, 2.0, 3.0]);
    assert_eq!(vector.dimensions(), 3);
    assert_eq!(vector.as_slice(), &[1.0, 2.0, 3.0]);
    assert_eq!(vector, Vector::from(&[1.0f32, 2.0, 3.0][..]));

    let half = HalfVector::from(vec![4.0, 5.0]);
    assert_eq!(half.dimensions(), 2);
    assert_eq!(half.into_vec(), vec![4.0, 5.0]);
}

#[test]
fn test_sparse_builders_agree() {
    let from_dense = SparseVector::from_dense(&[1.0, 0.0, 2.0, 0.0, 3.0, 0.0]);
    let from_map = SparseVector::from_map(
        HashMap::<usize, f32>::from([(2, 2.0), (4, 3.0), (3, 0.0), (0, 1.0)]),
        6,
    )
    .unwrap();
    let from_parts = SparseVector::new(6, vec![0, 2, 4], vec![1.0, 2.0, 3.0]).unwrap();

    assert_eq!(from_dense, from_map);
    assert_eq!(from_dense, from_parts);
    assert_eq!(from_dense.indices(), &[0, 2, 4]);
    assert_eq!(from_dense.values(), &[1.0, 2.0, 3.0]);
    assert_eq!(from_dense.dimensions(), 6);
}

#[test]
fn test_serde_vector_is_a_sequence() {
    let vector = Vector::from(vec![1.0, 2.5]);
    let json = serde_json::to_string(&vector).unwrap();
    assert_eq!(json, "[1.0,2.5]");
    assert_eq!(serde_json::from_str::<Vector>(&json).unwrap(), vector);

    let half: HalfVector = serde_json::from_str("[0.5]").unwrap();
    assert_eq!(half.as_slice(), &[0.5]);
}

#[test]
fn test_serde_sparse_vector_validates_lengths() {
    let vector = SparseVector::from(vec![0.0, 2.0, 0.0]);
    let json = serde_json::to_string(&vector).unwrap();
    assert_eq!(json, r#"{"dimensions":3,"indices":[1],"values":[2.0]}"#);
    assert_eq!(serde_json::from_str::<SparseVector>(&json).unwrap(), vector);

    let err = serde_json::from_str::<SparseVector>(
        r#"{"dimensions":3,"indices":[0,1],"values":[2.0]}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("indices and values must be the same length"));
}

#[test]
fn test_shared_across_threads() {
    let sparse = Arc::new(SparseVector::from(vec![0.0, 1.0, 0.0, 2.0]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sparse = Arc::clone(&sparse);
            thread::spawn(move || sparse.encode())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), "{2:1,4:2}/4");
    }
}

#[test]
fn test_decode_in_parallel() {
    let handles: Vec<_> = ["[1,2]", "[", "[3]"]
        .into_iter()
        .map(|text| thread::spawn(move || Vector::decode(text)))
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results[0], Ok(Vector::from(vec![1.0, 2.0])));
    assert_eq!(
        results[1],
        Err(VectorError::MalformedLiteral { type_name: "vector" })
    );
    assert_eq!(results[2], Ok(Vector::from(vec![3.0])));
}
