//! Random dataset generation for demos and tests.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use rand::seq::SliceRandom;
use rand::{Rng, thread_rng};
use rayon::prelude::*;

pub struct UsernameGenerator {
    prefixes: Vec<&'static str>,
    suffixes: Vec<&'static str>,
    used_names: Arc<Mutex<HashSet<String>>>,
}

impl UsernameGenerator {
    pub fn new() -> Self {
        UsernameGenerator {
            prefixes: vec![
                "aqua", "ember", "frost", "indie", "lunar", "maple", "noble", "pixel", "retro",
                "terra", "vivid", "zesty",
            ],
            suffixes: vec![
                "badger", "falcon", "heron", "lynx", "otter", "puffin", "raven", "sparrow",
                "tern", "vole", "wolf", "wren",
            ],
            used_names: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Generate up to `count` unique usernames in parallel.
    ///
    /// Collisions with already-issued names are filtered out, so the batch
    /// may come back slightly short of `count`.
    pub fn generate_unique_batch(&self, count: usize) -> Vec<String> {
        (0..count)
            .into_par_iter()
            .map_init(thread_rng, |rng, _| {
                let prefix = self.prefixes.choose(rng).unwrap();
                let suffix = self.suffixes.choose(rng).unwrap();
                let num = rng.gen_range(1..999);
                format!("{}_{}{}", prefix, suffix, num)
            })
            .filter(|name| {
                let mut used = self.used_names.lock().unwrap();
                used.insert(name.clone())
            })
            .collect()
    }
}

impl Default for UsernameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a random dataset of `USER` lines followed by `FRIEND` lines.
///
/// Friendship endpoints are drawn uniformly, so duplicate friendships and
/// self-loops can occur; the engine accepts both by design.
pub fn generate_dataset(
    num_users: usize,
    num_friendships: usize,
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    let generator = UsernameGenerator::new();
    let users = generator.generate_unique_batch(num_users);

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for user in &users {
        writeln!(writer, "USER {}", user)?;
    }
    if users.is_empty() {
        return writer.flush();
    }

    let pairs: Vec<(usize, usize)> = (0..num_friendships)
        .into_par_iter()
        .map_init(thread_rng, |rng, _| {
            (rng.gen_range(0..users.len()), rng.gen_range(0..users.len()))
        })
        .collect();
    for (a, b) in pairs {
        writeln!(writer, "FRIEND {} {}", users[a], users[b])?;
    }

    writer.flush()
}
