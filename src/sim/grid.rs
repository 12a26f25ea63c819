//! Brick grid state: live blocks, hit-points and the player's wallet
//!
//! Blocks are owned by the field and referenced by `BlockId`. A destroyed
//! block is removed before its payout is credited, so a second hit on the
//! same id finds nothing and cannot pay out again.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::catalog::BlockType;
use crate::settings::GridLayout;

/// Stable block handle (row-major cell index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u32);

/// A live block on the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub row: u32,
    pub col: u32,
    /// Center position, fixed at layout time
    pub pos: Vec2,
    /// Index into the field's catalog
    pub kind: usize,
    /// Remaining hit-points (always > 0 while the block is live)
    pub hp: u32,
    /// Hit-points at creation, paid out on destruction
    pub total_hp: u32,
}

/// Result of a ball hitting a live block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitOutcome {
    /// Block survived with `remaining` hit-points
    Damaged { remaining: u32 },
    /// Block was removed and `payout` credited to the wallet
    Destroyed { payout: u32 },
}

/// Player currency; only ever credited
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet(u64);

impl Wallet {
    pub fn balance(&self) -> u64 {
        self.0
    }

    fn credit(&mut self, amount: u32) {
        self.0 += u64::from(amount);
    }
}

/// The set of live blocks for one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickField {
    /// Live blocks, sorted by id
    blocks: Vec<Block>,
    catalog: Vec<BlockType>,
    wallet: Wallet,
    /// Blocks placed at layout time
    laid_out: usize,
    /// Sum of total hit-points over every block placed
    total_payout: u64,
}

/// Fill a `rows` x `cols` grid, cycling through `catalog` in row-major order.
///
/// Cell (row, col) gets `catalog[(row * cols + col) % catalog.len()]` at full
/// health. An empty catalog produces an empty field.
pub fn layout_grid(rows: u32, cols: u32, catalog: &[BlockType], layout: &GridLayout) -> BrickField {
    let mut blocks = Vec::with_capacity((rows * cols) as usize);

    if !catalog.is_empty() {
        for row in 0..rows {
            for col in 0..cols {
                let index = row * cols + col;
                let kind = index as usize % catalog.len();
                // A live block always has at least one hit-point
                let hp = catalog[kind].hp.max(1);
                blocks.push(Block {
                    id: BlockId(index),
                    row,
                    col,
                    pos: Vec2::new(
                        layout.origin_x + col as f32 * layout.spacing_x,
                        layout.origin_y + row as f32 * layout.spacing_y,
                    ),
                    kind,
                    hp,
                    total_hp: hp,
                });
            }
        }
    }

    let total_payout = blocks.iter().map(|b| u64::from(b.total_hp)).sum();
    log::debug!(
        "Laid out {}x{} grid: {} blocks, {} total payout",
        rows,
        cols,
        blocks.len(),
        total_payout
    );

    BrickField {
        laid_out: blocks.len(),
        blocks,
        catalog: catalog.to_vec(),
        wallet: Wallet::default(),
        total_payout,
    }
}

impl BrickField {
    /// Apply one ball hit to a live block.
    ///
    /// Returns `None` when `id` is not live (already destroyed or never
    /// existed); nothing changes in that case.
    pub fn apply_hit(&mut self, id: BlockId) -> Option<HitOutcome> {
        let Ok(index) = self.blocks.binary_search_by_key(&id, |b| b.id) else {
            log::warn!("Hit on block {:?} which is not live", id);
            return None;
        };

        let block = &mut self.blocks[index];
        block.hp = block.hp.saturating_sub(1);
        if block.hp > 0 {
            return Some(HitOutcome::Damaged {
                remaining: block.hp,
            });
        }

        let block = self.blocks.remove(index);
        self.wallet.credit(block.total_hp);
        log::debug!(
            "Block {:?} ({}) destroyed, +{} (wallet {})",
            block.id,
            self.catalog[block.kind].name,
            block.total_hp,
            self.wallet.balance()
        );
        Some(HitOutcome::Destroyed {
            payout: block.total_hp,
        })
    }

    /// True once every block has been destroyed
    pub fn is_cleared(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks
            .binary_search_by_key(&id, |b| b.id)
            .ok()
            .map(|i| &self.blocks[i])
    }

    /// Live blocks in id order
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Number of live blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Catalog entry describing a block
    pub fn block_type(&self, block: &Block) -> &BlockType {
        &self.catalog[block.kind]
    }

    pub fn wallet(&self) -> Wallet {
        self.wallet
    }

    /// Blocks placed at layout time
    pub fn laid_out(&self) -> usize {
        self.laid_out
    }

    /// Wallet balance once every block is destroyed
    pub fn total_payout(&self) -> u64 {
        self.total_payout
    }
}
