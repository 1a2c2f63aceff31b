/*!
 * Buddy Coalescing
 * Merges free buddy pairs back into their parent blocks
 */

use super::BuddyPool;
use log::debug;

impl BuddyPool {
    /// Merge every free buddy pair, collapsing chains in a single call
    ///
    /// Two adjacent free blocks merge when they have equal size and the lower
    /// one starts its buddy pair, i.e. its offset is a multiple of twice the
    /// block size. That keeps every merged block aligned to its own size, so
    /// it can merge again at the next level up. Idempotent.
    pub(crate) fn coalesce(&mut self) {
        self.blocks.sort_by_key(|b| b.start);

        let mut i = 0;
        while i + 1 < self.blocks.len() {
            let lo = &self.blocks[i];
            let hi = &self.blocks[i + 1];
            let mergeable = lo.free
                && hi.free
                && lo.size == hi.size
                && lo.end() == hi.start
                && lo.is_lower_buddy();

            if mergeable {
                self.blocks[i].size *= 2;
                self.blocks.remove(i + 1);
                debug!(
                    "Merged buddies at offset {} into a {} KB block",
                    self.blocks[i].start, self.blocks[i].size
                );
                // The grown block may pair with either neighbor, so step back
                // one position instead of advancing.
                i = i.saturating_sub(1);
            } else {
                i += 1;
            }
        }
    }
}
