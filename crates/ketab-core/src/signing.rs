//! Signing adapter.
//!
//! Thin wrapper over BIP-340 Schnorr signatures on secp256k1. Builders only
//! use [`derive_pubkey`]; signing and verification are for callers.

use std::str::FromStr;

use ketab_canonical::{event_digest, EventIdError, SignedEvent, UnsignedEvent};
use secp256k1::{schnorr, Keypair, Message, Secp256k1, XOnlyPublicKey};
use thiserror::Error;

/// Errors raised by the signing adapter.
#[derive(Error, Debug)]
pub enum SigningError {
    /// The secret key is not a valid secp256k1 scalar.
    #[error("invalid secret key: {0}")]
    InvalidSecretKey(String),
    /// Hex input could not be decoded.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// The event's pubkey is not the key being signed with.
    #[error("event pubkey {event} does not match signing key {signer}")]
    PubkeyMismatch {
        /// Pubkey carried by the event.
        event: String,
        /// Pubkey derived from the secret key.
        signer: String,
    },
    /// The event's pubkey is not a valid x-only public key.
    #[error("invalid pubkey: {0}")]
    InvalidPubkey(String),
    /// The signature field is malformed.
    #[error("invalid signature encoding: {0}")]
    InvalidSignature(String),
    /// The claimed id does not match the event's fields.
    #[error("event id mismatch: claimed {claimed}, computed {computed}")]
    IdMismatch {
        /// Id carried by the event.
        claimed: String,
        /// Id recomputed from the event fields.
        computed: String,
    },
    /// Signature verification failed.
    #[error("signature verification failed: {0}")]
    BadSignature(String),
    /// Event id computation failed.
    #[error("event ID computation failed: {0}")]
    EventId(#[from] EventIdError),
}

fn keypair(secret_key: &[u8]) -> Result<Keypair, SigningError> {
    let secp = Secp256k1::new();
    Keypair::from_seckey_slice(&secp, secret_key)
        .map_err(|e| SigningError::InvalidSecretKey(e.to_string()))
}

/// Derives the x-only public key for `secret_key` as 64 lowercase hex.
pub fn derive_pubkey(secret_key: &[u8]) -> Result<String, SigningError> {
    let (pubkey, _parity) = keypair(secret_key)?.x_only_public_key();
    Ok(pubkey.to_string())
}

/// Computes the event id and signs it.
///
/// # Errors
///
/// Fails if the key is invalid or if it does not own `event.pubkey`.
pub fn sign_event(event: &UnsignedEvent, secret_key: &[u8]) -> Result<SignedEvent, SigningError> {
    let keypair = keypair(secret_key)?;
    let signer = keypair.x_only_public_key().0.to_string();
    if signer != event.pubkey {
        return Err(SigningError::PubkeyMismatch {
            event: event.pubkey.clone(),
            signer,
        });
    }

    let digest = event_digest(event)?;
    let secp = Secp256k1::signing_only();
    let sig = secp.sign_schnorr_no_aux_rand(&Message::from_digest(digest), &keypair);

    let signed = SignedEvent::from_parts(event.clone(), hex::encode(digest), sig.to_string());
    tracing::debug!(kind = signed.kind, id = %signed.id, "event signed");
    Ok(signed)
}

/// Recomputes the id and checks the signature, reporting why it fails.
pub fn check_signature(event: &SignedEvent) -> Result<(), SigningError> {
    let digest = event_digest(&event.unsigned())?;
    let computed = hex::encode(digest);
    if computed != event.id {
        return Err(SigningError::IdMismatch {
            claimed: event.id.clone(),
            computed,
        });
    }

    let pubkey = XOnlyPublicKey::from_str(&event.pubkey)
        .map_err(|e| SigningError::InvalidPubkey(e.to_string()))?;
    let sig = schnorr::Signature::from_str(&event.sig)
        .map_err(|e| SigningError::InvalidSignature(e.to_string()))?;

    let secp = Secp256k1::verification_only();
    secp.verify_schnorr(&sig, &Message::from_digest(digest), &pubkey)
        .map_err(|e| SigningError::BadSignature(e.to_string()))
}

/// Returns true if the event id matches its fields and the signature is valid.
pub fn verify_event(event: &SignedEvent) -> bool {
    match check_signature(event) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(kind = event.kind, error = %err, "event failed verification");
            false
        }
    }
}

/// Decodes a hex secret key into bytes.
pub fn secret_key_from_hex(hex_key: &str) -> Result<Vec<u8>, SigningError> {
    Ok(hex::decode(hex_key)?)
}

/// Encodes secret key bytes as lowercase hex.
pub fn secret_key_to_hex(secret_key: &[u8]) -> String {
    hex::encode(secret_key)
}
