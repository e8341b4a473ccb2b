//! Session state
//!
//! Two pieces of lazily initialized, process-lifetime state: the
//! authenticated API handle and the active zone. Both are created on
//! first use and reused by every later command in the same session. The
//! session is threaded through the dispatcher explicitly; there is no
//! process-wide singleton.
//!
//! Credential values come from the environment, captured once at
//! startup. When a value is missing and the session is interactive, the
//! user is prompted (the API key prompt suppresses echo); when
//! non-interactive, the command fails naming the missing variable and no
//! remote call is made.

use std::env;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::traits::{ApiFactory, DnsApi, Prompt};

/// Environment variable supplying the account email
pub const ENV_EMAIL: &str = "CLOUDFLARE_EMAIL";

/// Environment variable supplying the API key
pub const ENV_API_KEY: &str = "CLOUDFLARE_KEY";

/// Environment variable supplying the default zone name
pub const ENV_ZONE: &str = "CLOUDFLARE_ZONE";

/// Credential values captured from the environment at startup
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: Option<String>,
    pub api_key: Option<String>,
    pub zone: Option<String>,
}

impl Credentials {
    /// Read all credential variables, treating empty values as unset
    pub fn from_env() -> Self {
        fn non_empty(var: &str) -> Option<String> {
            env::var(var).ok().filter(|v| !v.is_empty())
        }
        Self {
            email: non_empty(ENV_EMAIL),
            api_key: non_empty(ENV_API_KEY),
            zone: non_empty(ENV_ZONE),
        }
    }
}

/// The resolved active zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveZone {
    /// Provider-assigned opaque zone identifier
    pub id: String,
    /// The human-readable zone name it was resolved from
    pub name: String,
}

/// Per-process mutable session state, passed to handlers by reference
pub struct Session {
    interactive: bool,
    credentials: Credentials,
    factory: Box<dyn ApiFactory>,
    prompt: Box<dyn Prompt>,
    api: Option<Arc<dyn DnsApi>>,
    zone: Option<ActiveZone>,
}

impl Session {
    pub fn new(
        interactive: bool,
        credentials: Credentials,
        factory: Box<dyn ApiFactory>,
        prompt: Box<dyn Prompt>,
    ) -> Self {
        Self {
            interactive,
            credentials,
            factory,
            prompt,
            api: None,
            zone: None,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// The authenticated API handle, created on first use
    ///
    /// A failed connection is not cached: the next command collects
    /// credentials again.
    pub fn api(&mut self) -> Result<Arc<dyn DnsApi>> {
        if let Some(api) = &self.api {
            return Ok(Arc::clone(api));
        }

        let email = self.require(
            ENV_EMAIL,
            self.credentials.email.clone(),
            "Enter cloudflare account email: ",
            false,
        )?;
        let api_key = self.require(
            ENV_API_KEY,
            self.credentials.api_key.clone(),
            "Enter cloudflare API key: ",
            true,
        )?;

        tracing::debug!("creating API handle");
        let api: Arc<dyn DnsApi> = Arc::from(self.factory.connect(&email, &api_key)?);
        self.api = Some(Arc::clone(&api));
        Ok(api)
    }

    /// The active zone, resolved on first use and cached thereafter
    pub async fn zone(&mut self) -> Result<ActiveZone> {
        if let Some(zone) = &self.zone {
            return Ok(zone.clone());
        }

        let name = self.require(
            ENV_ZONE,
            self.credentials.zone.clone(),
            "Enter zone name: ",
            false,
        )?;
        self.set_zone(&name).await
    }

    /// Resolve `name` to a zone ID and make it the active zone
    pub async fn set_zone(&mut self, name: &str) -> Result<ActiveZone> {
        let api = self.api()?;
        let id = api.zone_id_by_name(name).await?;
        tracing::debug!("active zone {} resolved to {}", name, id);
        let zone = ActiveZone {
            id,
            name: name.to_string(),
        };
        self.zone = Some(zone.clone());
        Ok(zone)
    }

    /// Produce `cached` if present, else prompt for it interactively,
    /// else fail naming the environment variable.
    fn require(
        &mut self,
        variable: &'static str,
        cached: Option<String>,
        prompt: &str,
        hidden: bool,
    ) -> Result<String> {
        if let Some(value) = cached {
            return Ok(value);
        }
        if !self.interactive {
            return Err(Error::MissingCredential { variable });
        }
        let value = if hidden {
            self.prompt.read_hidden(prompt)?
        } else {
            self.prompt.read_line(prompt)?
        };
        // An empty answer at the prompt is the same as an unset variable.
        if value.is_empty() {
            return Err(Error::MissingCredential { variable });
        }
        Ok(value)
    }
}
