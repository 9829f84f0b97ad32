//! `/blocks` endpoints - the blockchain-style audit log.

use crate::client::VotingApiClient;
use crate::error::ApiError;
use vc_types::{Block, DecryptedVote};

impl VotingApiClient {
    /// `GET /blocks` - the full audit log.
    pub async fn blocks(&self) -> Result<Vec<Block>, ApiError> {
        self.get_json("/blocks").await
    }

    /// `GET /blocks/election/{id}` - audit entries for one election.
    pub async fn blocks_by_election(&self, election_id: i64) -> Result<Vec<Block>, ApiError> {
        self.get_json(&format!("/blocks/election/{election_id}"))
            .await
    }

    /// `GET /blocks/latest`.
    pub async fn latest_block(&self) -> Result<Block, ApiError> {
        self.get_json("/blocks/latest").await
    }

    /// `GET /blocks/count`.
    pub async fn block_count(&self) -> Result<u64, ApiError> {
        self.get_json("/blocks/count").await
    }

    /// `GET /blocks/{height}/decrypt-vote` - server-side decryption of one
    /// audit entry's vote payload (admin vote-viewing modal).
    pub async fn decrypt_vote(&self, block_height: u64) -> Result<DecryptedVote, ApiError> {
        self.get_json(&format!("/blocks/{block_height}/decrypt-vote"))
            .await
    }
}
