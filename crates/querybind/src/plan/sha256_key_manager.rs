use crate::plan::QueryPlanKeyManager;
use sha2::Digest;
use sha2::Sha256;

/// Keys of the form `<schema identity>:sha256:<hex digest>`.
///
/// Every input is length-prefixed before hashing so no two distinct input
/// tuples share a byte stream (`("ab", "c")` vs `("a", "bc")`), and a missing
/// operation name hashes differently from an empty one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256KeyManager;
impl Sha256KeyManager {
    pub fn new() -> Self {
        Self
    }
}
impl QueryPlanKeyManager for Sha256KeyManager {
    fn create_key(
        &self,
        schema_identity: &str,
        query_text: &str,
        operation_name: Option<&str>,
    ) -> String {
        let mut hasher = Sha256::new();
        hash_part(&mut hasher, schema_identity.as_bytes());
        hash_part(&mut hasher, query_text.as_bytes());
        match operation_name {
            Some(operation_name) => {
                hasher.update([1u8]);
                hash_part(&mut hasher, operation_name.as_bytes());
            },
            None => hasher.update([0u8]),
        }
        format!("{schema_identity}:sha256:{}", hex::encode(hasher.finalize()))
    }
}

fn hash_part(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_be_bytes());
    hasher.update(bytes);
    hasher.update([0u8]);
}
