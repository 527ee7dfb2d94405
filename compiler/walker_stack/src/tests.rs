use super::*;

/// Mimics the scanner: every level owns a small buffer that must survive
/// the nested call.
fn nest(depth: usize, trail: &mut Vec<u8>) -> usize {
    ensure_sufficient_stack(|| {
        if depth == 0 {
            return 0;
        }
        let local = [b'{'; 64];
        trail.push(local[depth % 64]);
        nest(depth - 1, trail) + 1
    })
}

#[test]
fn test_shallow_nesting() {
    let mut trail = Vec::new();
    assert_eq!(nest(16, &mut trail), 16);
    assert_eq!(trail.len(), 16);
}

#[test]
fn test_deep_nesting() {
    // Well past what an 8MB main-thread stack tolerates with 64-byte locals
    let mut trail = Vec::new();
    assert_eq!(nest(200_000, &mut trail), 200_000);
}

#[test]
fn test_passes_through_result() {
    let flow: Result<(), &str> = ensure_sufficient_stack(|| Err("thrown"));
    assert_eq!(flow, Err("thrown"));
}

#[test]
#[cfg(not(target_arch = "wasm32"))]
fn test_remaining_stack_reported() {
    assert!(remaining_stack().is_some_and(|n| n > 0));
}
