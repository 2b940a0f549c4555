//! Shared fakes for service tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use sharebox_auth::password::PasswordHasher;
use sharebox_core::error::AppError;
use sharebox_core::result::AppResult;
use sharebox_core::traits::{IdGenerator, Provisioner};
use sharebox_database::{MemoryUserRepository, UserRepository};
use sharebox_entity::user::{Preferences, Quota, Role, User};

use crate::context::RequestContext;

pub fn hasher() -> PasswordHasher {
    PasswordHasher::with_cost(1024, 1).expect("params")
}

/// Records every provisioning call; can be told to fail.
#[derive(Debug, Default)]
pub struct RecordingProvisioner {
    pub calls: Mutex<Vec<String>>,
    pub fail: std::sync::atomic::AtomicBool,
}

impl RecordingProvisioner {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }

    fn record(&self, call: String) -> AppResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::storage("disk unavailable"));
        }
        self.calls.lock().expect("lock").push(call);
        Ok(())
    }
}

#[async_trait]
impl Provisioner for RecordingProvisioner {
    async fn mkdir_all(&self, path: &str) -> AppResult<()> {
        self.record(format!("mkdir {path}"))
    }

    async fn remove(&self, path: &str) -> AppResult<()> {
        self.record(format!("remove {path}"))
    }
}

/// Hands out 100, 101, ...
#[derive(Debug)]
pub struct SequenceIds(AtomicU64);

impl Default for SequenceIds {
    fn default() -> Self {
        Self(AtomicU64::new(100))
    }
}

impl IdGenerator for SequenceIds {
    fn gen_id(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}

pub struct Fixture {
    pub repo: Arc<MemoryUserRepository>,
    pub provisioner: Arc<RecordingProvisioner>,
    pub ids: Arc<SequenceIds>,
    next_id: AtomicU64,
}

impl Fixture {
    pub async fn new() -> Self {
        Self {
            repo: Arc::new(MemoryUserRepository::new()),
            provisioner: Arc::new(RecordingProvisioner::default()),
            ids: Arc::new(SequenceIds::default()),
            next_id: AtomicU64::new(10),
        }
    }

    /// Stores a user directly and returns a context acting as them.
    pub async fn add(&self, name: &str, pwd: &str, role: Role) -> RequestContext {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.add_with_id(id, name, pwd, role).await
    }

    pub async fn add_with_id(&self, id: u64, name: &str, pwd: &str, role: Role) -> RequestContext {
        self.repo
            .create(&User {
                id,
                name: name.to_string(),
                pwd: hasher().hash_password(pwd).expect("hash"),
                role: role.clone(),
                used_space: 0,
                quota: Quota::default(),
                preferences: Preferences::default(),
            })
            .await
            .expect("create");
        RequestContext::new(id, name, role)
    }

    pub async fn password_matches(&self, id: u64, pwd: &str) -> bool {
        let user = self.repo.find_by_id(id).await.expect("find").expect("user");
        hasher().verify_password(pwd, &user.pwd).expect("verify")
    }
}
