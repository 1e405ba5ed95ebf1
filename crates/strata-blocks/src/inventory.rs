use crate::types::{ItemId, ItemStack};

/// Fixed-size slot array held by a container block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    slots: Vec<Option<ItemStack>>,
}

impl Inventory {
    pub fn with_slots(n: usize) -> Self {
        Self {
            slots: vec![None; n],
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn stacks(&self) -> impl Iterator<Item = &ItemStack> {
        self.slots.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }

    pub fn count_of(&self, item: ItemId) -> u64 {
        self.stacks()
            .filter(|s| s.item == item)
            .map(|s| s.count as u64)
            .sum()
    }

    pub fn total_items(&self) -> u64 {
        self.stacks().map(|s| s.count as u64).sum()
    }

    /// Inserts `stack`, topping up matching partial stacks before using empty slots.
    /// Returns whatever did not fit.
    pub fn add_stack(&mut self, mut stack: ItemStack) -> Option<ItemStack> {
        if stack.count == 0 {
            return None;
        }

        for existing in self.slots.iter_mut().flatten() {
            if !existing.stacks_with(&stack) {
                continue;
            }
            let max = existing.max_stack_size();
            if existing.count >= max {
                continue;
            }
            let to_add = (max - existing.count).min(stack.count);
            existing.count += to_add;
            stack.count -= to_add;
            if stack.count == 0 {
                return None;
            }
        }

        for slot in &mut self.slots {
            if slot.is_some() {
                continue;
            }
            let max = stack.max_stack_size();
            if stack.count <= max {
                *slot = Some(stack);
                return None;
            }
            *slot = Some(stack.with_count(max));
            stack.count -= max;
        }

        Some(stack)
    }

    /// Inserts every stack in order and collects the overflow.
    pub fn add_all(&mut self, stacks: impl IntoIterator<Item = ItemStack>) -> Vec<ItemStack> {
        stacks
            .into_iter()
            .filter_map(|s| self.add_stack(s))
            .collect()
    }

    /// Empties the inventory and returns its stacks in slot order.
    pub fn take_all(&mut self) -> Vec<ItemStack> {
        self.slots.iter_mut().filter_map(|s| s.take()).collect()
    }
}
