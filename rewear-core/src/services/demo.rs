//! Demo service - manage demo mode
//!
//! Demo mode provides sample members and listings for trying the app
//! without touching real data. The demo document lives in its own file
//! (`demo.json`); toggling demo mode switches which file the context opens.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::adapters::JsonFileStore;
use crate::config::Config;
use crate::domain::{Item, User};
use crate::ports::Store;

/// Password shared by the seeded demo members
pub const DEMO_PASSWORD: &str = "rewear-demo";

/// Demo service for managing demo mode
pub struct DemoService {
    data_dir: PathBuf,
}

impl DemoService {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Check if demo mode is currently enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let config = Config::load(&self.data_dir)?;
        Ok(config.demo_mode)
    }

    /// Enable demo mode
    ///
    /// This will:
    /// 1. Delete any existing demo document (fresh start)
    /// 2. Create a demo document with sample members and listings
    /// 3. Enable demo mode in config
    pub fn enable(&self) -> Result<()> {
        let demo_path = self.data_dir.join("demo.json");
        let demo_lock = self.data_dir.join("demo.json.lock");
        if demo_path.exists() {
            std::fs::remove_file(&demo_path)?;
        }
        if demo_lock.exists() {
            std::fs::remove_file(&demo_lock)?;
        }

        let store = JsonFileStore::open(&demo_path)?;
        seed_demo_data(&store)?;

        // Flip the flag only once the seeded document exists, so a failed
        // seed never points the app at an empty demo file
        let mut config = Config::load(&self.data_dir).unwrap_or_default();
        config.enable_demo_mode();
        config.save(&self.data_dir)?;
        Ok(())
    }

    /// Disable demo mode (the demo document is kept for re-enabling)
    pub fn disable(&self) -> Result<()> {
        let mut config = Config::load(&self.data_dir).unwrap_or_default();
        config.disable_demo_mode();
        config.save(&self.data_dir)?;
        Ok(())
    }
}

/// Populate a store with sample members and listings
pub fn seed_demo_data(store: &dyn Store) -> crate::domain::result::Result<()> {
    let users = demo_users();
    let items = demo_items(&users[0].id, &users[1].id);
    store.commit(&mut |data| {
        data.users = users.clone();
        data.items = items.clone();
        Ok(())
    })
}

fn demo_users() -> Vec<User> {
    vec![
        User::new("Sasha Demo", "sasha@demo.rewear", DEMO_PASSWORD, 100, false),
        User::new("Riley Demo", "riley@demo.rewear", DEMO_PASSWORD, 100, false),
    ]
}

fn demo_items(sasha_id: &str, riley_id: &str) -> Vec<Item> {
    let specs: &[(&str, &str, &str, &str, &str, &str, &[&str], i64)] = &[
        (
            "Denim Jacket",
            "Classic mid-wash denim jacket, barely worn",
            "Outerwear",
            "M",
            "jacket",
            "like-new",
            &["denim", "casual"],
            45,
        ),
        (
            "Linen Summer Dress",
            "Light sage dress, perfect for warm days",
            "Dresses",
            "S",
            "dress",
            "good",
            &["linen", "summer"],
            35,
        ),
        (
            "Wool Overcoat",
            "Heavy charcoal overcoat, two seasons of wear",
            "Outerwear",
            "L",
            "coat",
            "fair",
            &["wool", "winter"],
            60,
        ),
        (
            "Graphic Tee",
            "Band tee, soft cotton, small print fade",
            "Tops",
            "M",
            "shirt",
            "good",
            &["cotton", "casual"],
            15,
        ),
    ];

    specs
        .iter()
        .enumerate()
        .map(|(i, (title, desc, category, size, kind, condition, tags, points))| {
            let owner = if i % 2 == 0 { sasha_id } else { riley_id };
            let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
            Item::new(owner, *title, *desc, *category, *size, *kind, *condition, &tags, *points)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;

    #[test]
    fn test_seed_produces_available_listings_for_both_members() {
        let store = MemoryStore::new();
        seed_demo_data(&store).unwrap();

        let data = store.snapshot().unwrap();
        assert_eq!(data.users.len(), 2);
        assert_eq!(data.items.len(), 4);

        for user in &data.users {
            assert!(user.verify_password(DEMO_PASSWORD));
            assert!(data.items.iter().any(|i| i.owner_id == user.id));
        }
    }

    #[test]
    fn test_failed_enable_leaves_demo_mode_off() {
        let dir = tempfile::TempDir::new().unwrap();
        // A directory where the document should go makes seeding impossible
        std::fs::create_dir(dir.path().join("demo.json")).unwrap();
        std::fs::write(dir.path().join("demo.json").join("keep"), "x").unwrap();

        let demo = DemoService::new(dir.path());
        assert!(demo.enable().is_err());
        assert!(!demo.is_enabled().unwrap());
    }

    #[test]
    fn test_enable_creates_demo_document() {
        let dir = tempfile::TempDir::new().unwrap();
        let demo = DemoService::new(dir.path());

        assert!(!demo.is_enabled().unwrap());
        demo.enable().unwrap();
        assert!(demo.is_enabled().unwrap());
        assert!(dir.path().join("demo.json").exists());

        demo.disable().unwrap();
        assert!(!demo.is_enabled().unwrap());
    }
}
