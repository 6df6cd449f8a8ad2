// ABOUTME: Shared utility functions for Carryover
// ABOUTME: Server-side id generation

/// Prefix reserved for client-side provisional identifiers.
pub const TEMP_ID_PREFIX: &str = "tmp-";

/// Generate a server-issued entity id.
pub fn generate_id() -> String {
    // the default nanoid alphabet contains '-', so an id could collide with the prefix
    loop {
        let id = nanoid::nanoid!();
        if !id.starts_with(TEMP_ID_PREFIX) {
            return id;
        }
    }
}
