/// Iteration count used by the `strbench` binary.
pub const DEFAULT_ITERATIONS: usize = 100_000;

/// Naive immutable-string append.
///
/// Every iteration allocates a fresh string one byte longer than the previous
/// one and copies the old contents into it before appending `'!'`. Appending
/// with `String::push` would amortize the growth, which is exactly what this
/// phase must not do, so the reallocation is spelled out by hand. Total work
/// is O(n²) character copies.
pub fn concat_phase(n: usize) -> String {
    let mut acc = String::new();
    for _ in 0..n {
        let mut next = String::with_capacity(acc.len() + 1);
        next.push_str(&acc);
        next.push('!');
        acc = next;
    }
    acc
}

/// Mutable-buffer append with amortized O(1) growth.
///
/// Pushes into a growable byte buffer in place and materializes the final
/// string once, after the loop. The materialization is part of the measured
/// work even though callers never inspect the result.
pub fn builder_phase(n: usize) -> String {
    let mut buf = Vec::new();
    for _ in 0..n {
        buf.push(b'!');
    }
    String::from_utf8(buf).expect("buffer holds only ASCII '!'")
}
