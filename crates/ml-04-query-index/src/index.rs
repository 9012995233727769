//! Chain lookups

use serde::Serialize;
use shared_types::{Block, Transaction};

/// A transaction together with the block that embeds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TransactionLocation<'a> {
    pub transaction: &'a Transaction,
    pub block: &'a Block,
}

/// Every transaction touching an address, and the resulting balance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSummary {
    /// Transactions where the address is sender or recipient, in chain order.
    pub history: Vec<Transaction>,
    /// Credits minus debits. May be negative: spends are not authorized.
    pub balance: i128,
}

/// Borrowing view over a chain.
#[derive(Clone, Copy, Debug)]
pub struct QueryIndex<'a> {
    chain: &'a [Block],
}

impl<'a> QueryIndex<'a> {
    pub fn new(chain: &'a [Block]) -> Self {
        Self { chain }
    }

    /// First block whose stored hash equals `hash`.
    pub fn find_block_by_hash(&self, hash: &str) -> Option<&'a Block> {
        self.chain.iter().find(|block| block.hash == hash)
    }

    /// First transaction with the given id, and its block.
    pub fn find_transaction(&self, transaction_id: &str) -> Option<TransactionLocation<'a>> {
        self.chain.iter().find_map(|block| {
            block
                .transactions
                .iter()
                .find(|tx| tx.transaction_id == transaction_id)
                .map(|transaction| TransactionLocation { transaction, block })
        })
    }

    /// History and balance for `address`.
    ///
    /// A transaction from an address to itself counts as a credit.
    pub fn address_summary(&self, address: &str) -> AddressSummary {
        let history: Vec<Transaction> = self
            .chain
            .iter()
            .flat_map(|block| block.transactions.iter())
            .filter(|tx| tx.involves(address))
            .cloned()
            .collect();

        let balance = history.iter().fold(0i128, |balance, tx| {
            if tx.recipient == address {
                balance + i128::from(tx.amount)
            } else {
                balance - i128::from(tx.amount)
            }
        });

        AddressSummary { history, balance }
    }
}
