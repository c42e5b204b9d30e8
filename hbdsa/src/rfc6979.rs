//! Deterministic nonce generation (RFC 6979, section 3.2).

use hmac::{Mac, SimpleHmac};
use num_bigint::BigUint;
use num_traits::Zero;
use sha2::digest::Digest;
use sha2::digest::core_api::BlockSizeUser;
use tracing::debug;

use curve::to_be_bytes_padded;

fn hmac_parts<D>(key: &[u8], parts: &[&[u8]]) -> Vec<u8>
where
    D: Digest + BlockSizeUser + Clone,
{
    let mut mac =
        <SimpleHmac<D> as Mac>::new_from_slice(key).expect("HMAC can take key of any size");
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().to_vec()
}

/// Leftmost `qlen` bits of `bytes` as an integer.
fn bits2int(bytes: &[u8], qlen: u64) -> BigUint {
    let value = BigUint::from_bytes_be(bytes);
    let blen = bytes.len() as u64 * 8;
    if blen > qlen { value >> (blen - qlen) } else { value }
}

/// Generate `k` in `[1, order - 1]` from a secret scalar and a message digest.
///
/// `digest` is the message hash `H(m)`; the HMAC uses the same hash `D`.
/// Candidates outside the range are rejected and the HMAC state is updated
/// before the next attempt, so the function always returns.
///
/// # Panics
///
/// Panics if `order < 2`.
pub fn generate_k<D>(order: &BigUint, secret: &BigUint, digest: &[u8]) -> BigUint
where
    D: Digest + BlockSizeUser + Clone,
{
    assert!(order > &BigUint::from(1u8), "group order must exceed 1");

    let qlen = order.bits();
    let rlen = qlen.div_ceil(8) as usize;
    let hlen = <D as Digest>::output_size();

    let x = to_be_bytes_padded(secret, rlen);
    let h = to_be_bytes_padded(&(bits2int(digest, qlen) % order), rlen);

    let mut v = vec![0x01u8; hlen];
    let mut k = vec![0x00u8; hlen];

    k = hmac_parts::<D>(&k, &[&v, &[0x00], &x, &h]);
    v = hmac_parts::<D>(&k, &[&v]);
    k = hmac_parts::<D>(&k, &[&v, &[0x01], &x, &h]);
    v = hmac_parts::<D>(&k, &[&v]);

    loop {
        let mut t = Vec::with_capacity(rlen + hlen);
        while t.len() < rlen {
            v = hmac_parts::<D>(&k, &[&v]);
            t.extend_from_slice(&v);
        }

        let candidate = bits2int(&t, qlen);
        if !candidate.is_zero() && &candidate < order {
            return candidate;
        }

        debug!("rfc6979 candidate out of range, retrying");
        k = hmac_parts::<D>(&k, &[&v, &[0x00]]);
        v = hmac_parts::<D>(&k, &[&v]);
    }
}
