//! # Ledger State
//!
//! Chain plus pending pool, with trusted append for locally mined blocks and
//! checked append for blocks received from peers.

use shared_types::{
    now_millis, Block, BlockContent, ChainSnapshot, LedgerError, Transaction,
};

/// Ordered chain of sealed blocks and the pool of unsealed transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    /// Sealed blocks, genesis first.
    chain: Vec<Block>,
    /// Transactions awaiting inclusion, in arrival order.
    pending_transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create a ledger holding only the genesis block.
    pub fn new() -> Self {
        Self {
            chain: vec![Block::genesis()],
            pending_transactions: Vec::new(),
        }
    }

    /// Rebuild a ledger from a reported snapshot.
    ///
    /// The snapshot is taken as-is; an empty chain makes `last_block` fail
    /// with [`LedgerError::EmptyChain`].
    pub fn from_snapshot(snapshot: ChainSnapshot) -> Self {
        Self {
            chain: snapshot.chain,
            pending_transactions: snapshot.pending_transactions,
        }
    }

    /// Create a transaction with a fresh id. Does not touch the pool.
    pub fn create_transaction(
        amount: u64,
        sender: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Transaction {
        Transaction::new(amount, sender, recipient)
    }

    /// Append `tx` to the pending pool.
    ///
    /// Returns the number of the block the transaction is expected to land
    /// in. The number is advisory: nothing is reserved, and a concurrent
    /// seal or chain replacement can move the transaction to a later block.
    pub fn add_to_pending_pool(&mut self, tx: Transaction) -> Result<u64, LedgerError> {
        let next_number = self.next_number()?;

        tracing::debug!(
            transaction_id = %tx.transaction_id,
            amount = tx.amount,
            next_number,
            "Transaction added to pending pool"
        );

        self.pending_transactions.push(tx);
        Ok(next_number)
    }

    /// The chain's final block.
    pub fn last_block(&self) -> Result<&Block, LedgerError> {
        self.chain.last().ok_or(LedgerError::EmptyChain)
    }

    /// Number the next sealed block will carry.
    fn next_number(&self) -> Result<u64, LedgerError> {
        let number = self.last_block()?.number;
        number
            .checked_add(1)
            .ok_or(LedgerError::NumberOverflow { number })
    }

    /// Content a miner seals over: the current pool and the next number.
    pub fn next_block_content(&self) -> Result<BlockContent, LedgerError> {
        Ok(BlockContent {
            transactions: self.pending_transactions.clone(),
            number: self.next_number()?,
        })
    }

    /// Append a locally mined block built from the current pool.
    ///
    /// The caller must have sealed `(previous_hash, next_block_content())`;
    /// proof-of-work is not re-verified here. The pool is cleared.
    pub fn append_block(
        &mut self,
        nonce: u64,
        previous_hash: impl Into<String>,
        hash: impl Into<String>,
    ) -> Result<Block, LedgerError> {
        let number = self.next_number()?;

        let block = Block {
            number,
            timestamp: now_millis(),
            transactions: std::mem::take(&mut self.pending_transactions),
            nonce,
            hash: hash.into(),
            previous_block_hash: previous_hash.into(),
        };

        tracing::info!(
            number,
            hash = %block.hash,
            tx_count = block.transactions.len(),
            "Block appended"
        );

        self.chain.push(block.clone());
        Ok(block)
    }

    /// Append a block sealed by a peer.
    ///
    /// Accepted only when it extends the local tip: its previous hash must
    /// equal the tip hash and its number must be the tip number plus one.
    /// On acceptance the pool is cleared.
    pub fn accept_block(&mut self, block: Block) -> Result<Block, LedgerError> {
        let expected = self.next_number()?;
        let last = self.last_block()?;

        if block.previous_block_hash != last.hash {
            tracing::warn!(
                number = block.number,
                expected = %last.hash,
                actual = %block.previous_block_hash,
                "Peer block rejected: previous hash mismatch"
            );
            return Err(LedgerError::BlockRejected {
                number: block.number,
                reason: "previous hash does not match the chain tip".to_string(),
            });
        }

        if block.number != expected {
            tracing::warn!(
                expected,
                actual = block.number,
                "Peer block rejected: wrong number"
            );
            return Err(LedgerError::BlockRejected {
                number: block.number,
                reason: format!("expected block number {expected}"),
            });
        }

        tracing::info!(number = block.number, hash = %block.hash, "Peer block accepted");

        self.chain.push(block.clone());
        self.pending_transactions.clear();
        Ok(block)
    }

    /// Replace chain and pool wholesale. Only for validated chains.
    pub fn replace_chain(&mut self, chain: Vec<Block>, pending_transactions: Vec<Transaction>) {
        tracing::info!(
            old_len = self.chain.len(),
            new_len = chain.len(),
            "Chain replaced"
        );
        self.chain = chain;
        self.pending_transactions = pending_transactions;
    }

    /// The chain, genesis first.
    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    /// Transactions awaiting inclusion.
    pub fn pending_transactions(&self) -> &[Transaction] {
        &self.pending_transactions
    }

    /// Number of blocks in the chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether the chain has no blocks (never true after `new`).
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Copy of the full state as reported to peers.
    pub fn snapshot(&self) -> ChainSnapshot {
        ChainSnapshot {
            chain: self.chain.clone(),
            pending_transactions: self.pending_transactions.clone(),
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
