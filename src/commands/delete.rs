use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::config::ApiConfig;
use crate::directory::DirectoryClient;

pub fn delete_member(api: &ApiConfig, id: u64, yes: bool) -> Result<()> {
    if !yes && !confirm_deletion(id)? {
        println!("Aborted.");
        return Ok(());
    }

    let client = DirectoryClient::new(api)?;
    client.delete_member(id)?;

    println!("Deleted member {id}.");
    Ok(())
}

fn confirm_deletion(id: u64) -> Result<bool> {
    print!("Delete member {id}? This action cannot be undone. [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y" | "yes" | "Yes" | "YES")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_answers() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("Yes"));
        assert!(is_affirmative("  YES  "));
    }

    #[test]
    fn test_default_is_refusal() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("nope"));
    }
}
