//! Sign-Out Use Case
//!
//! Revokes the session's tokens at the provider and ends the local
//! authentication schemes.

use std::sync::Arc;

use platform::client::with_deadline;
use url::Url;

use crate::application::config::GalleryConfig;
use crate::application::discovery::resolve_discovery;
use crate::domain::{
    DiscoveryDocument, DiscoveryResolver, SchemeSignOut, TokenHandle, TokenKind, TokenRevoker,
};
use crate::error::{GalleryError, GalleryResult};

/// What a completed termination did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminationReport {
    /// Tokens revoked, in call order
    pub revoked: Vec<TokenKind>,
    /// Tokens that were absent
    pub skipped: Vec<TokenKind>,
    /// Local schemes ended, in call order
    pub signed_out: Vec<String>,
}

/// Session terminator
///
/// Access-token revocation strictly precedes refresh-token revocation, and
/// both precede local sign-out. A revocation failure stops further
/// revocation but local sign-out still runs; the failure is returned after.
pub struct SessionTerminator<R>
where
    R: TokenRevoker,
{
    revoker: Arc<R>,
    config: Arc<GalleryConfig>,
}

impl<R> SessionTerminator<R>
where
    R: TokenRevoker + Sync,
{
    pub fn new(revoker: Arc<R>, config: Arc<GalleryConfig>) -> Self {
        Self { revoker, config }
    }

    pub async fn terminate<L>(
        &self,
        discovery: &DiscoveryDocument,
        access_token: Option<&TokenHandle>,
        refresh_token: Option<&TokenHandle>,
        local: &L,
    ) -> GalleryResult<TerminationReport>
    where
        L: SchemeSignOut + Sync,
    {
        let mut report = TerminationReport::default();
        let endpoint = &discovery.revocation_endpoint;

        let revocation = match self
            .revoke(endpoint, access_token, TokenKind::Access, &mut report)
            .await
        {
            Ok(()) => {
                self.revoke(endpoint, refresh_token, TokenKind::Refresh, &mut report)
                    .await
            }
            Err(e) => Err(e),
        };

        let sign_out = self.sign_out_all(local, &mut report).await;

        revocation?;
        sign_out?;

        tracing::info!(
            revoked = report.revoked.len(),
            signed_out = report.signed_out.len(),
            "Session terminated"
        );
        Ok(report)
    }

    /// End every configured local scheme.
    ///
    /// All schemes are attempted; the first failure is returned.
    pub async fn sign_out_all<L>(&self, local: &L, report: &mut TerminationReport) -> GalleryResult<()>
    where
        L: SchemeSignOut + Sync,
    {
        let mut first_error = None;
        for scheme in self.config.schemes() {
            match local.sign_out(scheme).await {
                Ok(()) => {
                    tracing::debug!(scheme = %scheme.name, "Signed out of scheme");
                    report.signed_out.push(scheme.name.clone());
                }
                Err(e) => {
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    async fn revoke(
        &self,
        endpoint: &Url,
        token: Option<&TokenHandle>,
        kind: TokenKind,
        report: &mut TerminationReport,
    ) -> GalleryResult<()> {
        let Some(token) = token else {
            tracing::debug!(kind = %kind, "No token to revoke");
            report.skipped.push(kind);
            return Ok(());
        };

        let reason = match with_deadline(
            self.config.revocation_deadline,
            self.revoker.revoke(endpoint, token, kind),
        )
        .await
        {
            Ok(Ok(())) => {
                tracing::debug!(kind = %kind, "Token revoked");
                report.revoked.push(kind);
                return Ok(());
            }
            Ok(Err(e)) => e.to_string(),
            Err(elapsed) => elapsed.to_string(),
        };

        Err(GalleryError::RevocationFailed { kind, reason })
    }
}

/// Logout: resolve discovery, then terminate the session.
///
/// When discovery fails nothing can be revoked, but the local schemes are
/// still ended before `DiscoveryUnavailable` is returned.
pub struct SignOutUseCase<D, R>
where
    D: DiscoveryResolver,
    R: TokenRevoker,
{
    discovery: Arc<D>,
    terminator: SessionTerminator<R>,
    config: Arc<GalleryConfig>,
}

impl<D, R> SignOutUseCase<D, R>
where
    D: DiscoveryResolver + Sync,
    R: TokenRevoker + Sync,
{
    pub fn new(discovery: Arc<D>, revoker: Arc<R>, config: Arc<GalleryConfig>) -> Self {
        Self {
            discovery,
            terminator: SessionTerminator::new(revoker, config.clone()),
            config,
        }
    }

    pub async fn execute<L>(
        &self,
        access_token: Option<&TokenHandle>,
        refresh_token: Option<&TokenHandle>,
        local: &L,
    ) -> GalleryResult<TerminationReport>
    where
        L: SchemeSignOut + Sync,
    {
        match resolve_discovery(self.discovery.as_ref(), &self.config).await {
            Ok(document) => {
                self.terminator
                    .terminate(&document, access_token, refresh_token, local)
                    .await
            }
            Err(e) => {
                let mut report = TerminationReport::default();
                if let Err(sign_out_error) = self.terminator.sign_out_all(local, &mut report).await {
                    tracing::error!(error = %sign_out_error, "Local sign-out failed after discovery failure");
                }
                Err(e)
            }
        }
    }
}
