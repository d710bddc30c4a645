use crate::digest::Digest;

/// Computes the Merkle root of an ordered sequence of leaf digests.
///
/// Folds the leaves layer by layer: each consecutive pair becomes
/// `Hash(left || right)`, and an odd trailing element is paired with itself
/// (`Hash(last || last)`). This duplicate-last-odd-node variant is a
/// compatibility invariant; promoting the odd node instead would change
/// every root.
///
/// Edge cases:
/// - empty input returns `Hash(b"")`;
/// - a single leaf is already the terminal layer and is returned unmodified.
///
/// Order-sensitive: permuting leaves changes the root.
pub fn root(leaves: &[Digest]) -> Digest {
    if leaves.is_empty() {
        return Digest::of_bytes(b"");
    }
    let mut layer = leaves.to_vec();
    while layer.len() > 1 {
        let mut next = Vec::with_capacity(layer.len().div_ceil(2));
        for pair in layer.chunks(2) {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            next.push(Digest::of_pair(left, right));
        }
        layer = next;
    }
    layer[0]
}
