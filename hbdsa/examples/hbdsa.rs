use hbdsa::{DivisorNonce, HybridKey, NonceConfig, Signature, SigningKey, VerifyingKey};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = VerifyingKey::from(&sk);

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let vk_bytes = bincode::serialize(&vk).expect("serialize vk");

    let msg = b"hello hybrid";
    let key = HybridKey::from_signing_key(sk.clone());
    let sig = key.sign(msg).expect("sign");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");
    info!(public_key = %hex::encode(key.public_key_bytes()), "generated key");
    info!(signature = %hex::encode(sig.to_bytes()), "signed with divisor nonce");

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    assert!(vk2.verify(msg, &sig2));
    assert_eq!(sk2, sk);

    let classic = sk.sign_deterministic(msg).expect("sign");
    assert!(vk.verify(msg, &classic));
    info!(signature = %hex::encode(classic.to_bytes()), "signed with rfc6979 nonce");

    let narrow = DivisorNonce::new(NonceConfig::new(16).expect("config")).expect("nonce");
    let narrow_key = HybridKey::with_nonce_fn(sk, narrow);
    let narrow_sig = narrow_key.sign(msg).expect("sign");
    assert!(vk.verify(msg, &narrow_sig));
    info!(scalar_bits = 16, "narrow exponent window verified");
}
