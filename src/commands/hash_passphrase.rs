//! Hash-passphrase command - Prints an Argon2 hash for ADMIN_PASSPHRASE_HASH.

use crate::cli::args::HashPassphraseArgs;
use crate::domain::Passphrase;
use crate::errors::AppResult;

/// Execute the hash-passphrase command
pub fn execute(args: HashPassphraseArgs) -> AppResult<()> {
    let hash = Passphrase::new(&args.passphrase)?;
    println!("ADMIN_PASSPHRASE_HASH='{}'", hash.as_str());
    Ok(())
}
