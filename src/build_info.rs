pub const GIT_DESCRIBE: &str = env!("GIT_DESCRIBE");
pub const GIT_HASH: &str = env!("GIT_HASH");

/// `--version` string, crate version plus git description.
pub const VERSION: &str =
    concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_DESCRIBE"), ")");

pub fn report(name: &str) -> String {
    format!(
        "{{\n  \"name\": \"{}\",\n  \"git_describe\": \"{}\",\n  \"git_hash\": \"{}\"\n}}",
        name, GIT_DESCRIBE, GIT_HASH
    )
}
