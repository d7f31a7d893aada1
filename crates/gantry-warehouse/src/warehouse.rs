// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The warehouse orchestrator.
//!
//! A `Warehouse` owns the room topology, one shelf per room, and the
//! product registry. Shelf-local mutation is delegated to the shelves;
//! the registry is maintained here by applying the delta each shelf
//! operation reports back, which keeps the central invariant cheap to
//! uphold: for every registered product, the registry total equals the sum
//! of per-room counts.
//!
//! Room ids on this API are 1-based, matching the topology wire format;
//! every id and coordinate is validated before use.

use crate::{
    distribute::{SplitPolicy, spread},
    error::WarehouseError,
};
use gantry_model::{
    index::RoomIndex,
    product::ProductId,
    shelf::Shelf,
    slot::Slot,
    topology::{RoomTree, TopologyError},
};
use std::collections::BTreeMap;

/// A warehouse: a binary tree of rooms, one shelf per room, and a
/// warehouse-wide product registry.
///
/// Constructed empty of stock; populated through registration, per-room
/// placement, and distribution. All operations run synchronously and assume
/// exclusive access for their duration.
#[derive(Debug, Clone)]
pub struct Warehouse {
    topology: RoomTree,
    rooms: Vec<Shelf>,
    registry: BTreeMap<ProductId, usize>,
    split_policy: SplitPolicy,
}

impl Warehouse {
    /// Assembles a warehouse from a topology and one shelf per room.
    ///
    /// Shelf `i` belongs to room id `i + 1`. Fails when the topology does
    /// not name every room id in `[1, rooms.len()]` exactly once.
    pub fn new(topology: RoomTree, rooms: Vec<Shelf>) -> Result<Self, TopologyError> {
        topology.validate(rooms.len())?;
        Ok(Self {
            topology,
            rooms,
            registry: BTreeMap::new(),
            split_policy: SplitPolicy::default(),
        })
    }

    /// Sets the overflow-splitting convention used by distribution.
    #[inline]
    pub fn with_split_policy(mut self, policy: SplitPolicy) -> Self {
        self.split_policy = policy;
        self
    }

    /// Returns the split policy distribution currently uses.
    #[inline]
    pub const fn split_policy(&self) -> SplitPolicy {
        self.split_policy
    }

    /// Returns the number of rooms.
    #[inline]
    pub fn num_rooms(&self) -> usize {
        self.rooms.len()
    }

    /// Returns the room topology.
    #[inline]
    pub const fn topology(&self) -> &RoomTree {
        &self.topology
    }

    /// Returns the total slot capacity across all rooms.
    pub fn capacity(&self) -> usize {
        self.rooms.iter().map(Shelf::capacity).sum()
    }

    /// Returns the total number of occupied slots across all rooms.
    pub fn occupied(&self) -> usize {
        self.rooms.iter().map(Shelf::occupied).sum()
    }

    /// Returns the shelf of the given 1-based room id.
    pub fn room(&self, room_id: usize) -> Result<&Shelf, WarehouseError> {
        let index = self.room_index(room_id)?;
        Ok(&self.rooms[index])
    }

    // Mutable shelf access stays private: external mutation must go through
    // the warehouse so the registry sees every delta.
    fn room_mut(&mut self, room_id: usize) -> Result<&mut Shelf, WarehouseError> {
        let index = self.room_index(room_id)?;
        Ok(&mut self.rooms[index])
    }

    fn room_index(&self, room_id: usize) -> Result<usize, WarehouseError> {
        match RoomIndex::from_one_based(room_id) {
            Some(index) if index.get() < self.rooms.len() => Ok(index.get()),
            _ => Err(WarehouseError::RoomOutOfRange {
                room: room_id,
                num_rooms: self.rooms.len(),
            }),
        }
    }

    /// Registers a product with zero stock.
    ///
    /// Returns `false`, with no mutation, when the product already exists.
    pub fn register(&mut self, product: impl Into<ProductId>) -> bool {
        let product = product.into();
        if self.registry.contains_key(&product) {
            return false;
        }
        self.registry.insert(product, 0);
        true
    }

    /// Unregisters a product.
    ///
    /// Succeeds only when the product exists *and* its total stock is
    /// exactly zero; otherwise returns `false` with no mutation.
    pub fn unregister(&mut self, product: &str) -> bool {
        match self.registry.get(product) {
            Some(&0) => {
                self.registry.remove(product);
                true
            }
            _ => false,
        }
    }

    /// Checks whether a product is registered.
    #[inline]
    pub fn is_registered(&self, product: &str) -> bool {
        self.registry.contains_key(product)
    }

    /// Returns the registry total for a product, or `None` when the product
    /// is not registered.
    #[inline]
    pub fn query_count(&self, product: &str) -> Option<usize> {
        self.registry.get(product).copied()
    }

    /// Iterates over the full registry in ascending product order,
    /// zero-stock products included.
    pub fn inventory(&self) -> impl Iterator<Item = (&ProductId, usize)> {
        self.registry.iter().map(|(product, &count)| (product, count))
    }

    /// Places up to `quantity` items of `product` into one room's shelf and
    /// credits the registry with what was actually placed.
    ///
    /// Returns the shelf's leftover: the items that did not fit.
    pub fn place_in_room(
        &mut self,
        room_id: usize,
        product: &ProductId,
        quantity: usize,
    ) -> Result<usize, WarehouseError> {
        let index = self.room_index(room_id)?;
        let Some(total) = self.registry.get_mut(product.as_str()) else {
            return Err(WarehouseError::UnknownProduct(product.clone()));
        };

        let leftover = self.rooms[index].place(product, quantity);
        *total += quantity - leftover;
        Ok(leftover)
    }

    /// Removes up to `quantity` items of `product` from one room's shelf and
    /// debits the registry by what was actually removed.
    ///
    /// Returns the shelf's shortfall: the items that could not be removed.
    pub fn remove_from_room(
        &mut self,
        room_id: usize,
        product: &ProductId,
        quantity: usize,
    ) -> Result<usize, WarehouseError> {
        let index = self.room_index(room_id)?;
        let Some(total) = self.registry.get_mut(product.as_str()) else {
            return Err(WarehouseError::UnknownProduct(product.clone()));
        };

        let shortfall = self.rooms[index].remove(product, quantity);
        *total -= quantity - shortfall;
        Ok(shortfall)
    }

    /// Distributes `quantity` items of `product` across the room tree per
    /// the overflow-splitting policy, then credits the registry once with
    /// everything that found a slot.
    ///
    /// Returns the overflow; a positive value means the reachable tree is
    /// at capacity.
    pub fn distribute(
        &mut self,
        product: &ProductId,
        quantity: usize,
    ) -> Result<usize, WarehouseError> {
        let Some(total) = self.registry.get_mut(product.as_str()) else {
            return Err(WarehouseError::UnknownProduct(product.clone()));
        };

        let overflow = spread(
            &self.topology,
            &mut self.rooms,
            product,
            quantity,
            self.split_policy,
        );
        *total += quantity - overflow;
        Ok(overflow)
    }

    /// Compacts one room's shelf.
    pub fn compact(&mut self, room_id: usize) -> Result<(), WarehouseError> {
        self.room_mut(room_id)?.compact();
        Ok(())
    }

    /// Compacts and alphabetizes one room's shelf.
    pub fn reorganize(&mut self, room_id: usize) -> Result<(), WarehouseError> {
        self.room_mut(room_id)?.reorganize();
        Ok(())
    }

    /// Resizes one room's shelf to `rows × columns`.
    ///
    /// Returns `Ok(false)`, with no mutation, when the shelf's current
    /// contents would not fit.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn resize(
        &mut self,
        room_id: usize,
        rows: usize,
        columns: usize,
    ) -> Result<bool, WarehouseError> {
        Ok(self.room_mut(room_id)?.resize(rows, columns))
    }

    /// Returns the slot at physical coordinate `(f, c)` of one room's shelf
    /// (row `f` counted from the bottom, column `c` from the left, both
    /// 1-based).
    pub fn position(&self, room_id: usize, f: usize, c: usize) -> Result<&Slot, WarehouseError> {
        let shelf = self.room(room_id)?;
        shelf
            .try_position(f, c)
            .ok_or(WarehouseError::CoordinatesOutOfRange {
                f,
                c,
                dims: shelf.dims(),
            })
    }

    /// Writes one room's shelf to `out` as it physically stands (top row
    /// first, empty slots rendered as `NULL`).
    pub fn write_room<W: std::io::Write>(
        &self,
        room_id: usize,
        out: &mut W,
    ) -> Result<(), WarehouseError> {
        self.room(room_id)?.write(out)?;
        Ok(())
    }

    /// Asserts the registry invariant: every registered product's total
    /// equals the sum of per-room counts. Test-only.
    #[cfg(test)]
    fn assert_registry_consistent(&self) {
        for (product, &total) in &self.registry {
            let held: usize = self.rooms.iter().map(|room| room.count_of(product)).sum();
            assert_eq!(
                held, total,
                "registry total for '{}' diverged from shelf counts",
                product
            );
        }
        // No unregistered product may occupy a slot.
        for room in &self.rooms {
            for (product, _) in room.products() {
                assert!(self.registry.contains_key(product.as_str()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(id: &str) -> ProductId {
        ProductId::from(id)
    }

    /// Root 1 with right child 2 and left child 3, each room a 1x2 shelf.
    fn three_room_warehouse() -> Warehouse {
        let topology = RoomTree::from_preorder(&[1, 2, 0, 0, 3, 0, 0]).unwrap();
        let rooms = (0..3).map(|_| Shelf::new(1, 2)).collect();
        Warehouse::new(topology, rooms).unwrap()
    }

    #[test]
    fn test_new_rejects_inconsistent_topology() {
        let topology = RoomTree::from_preorder(&[1, 0, 0]).unwrap();
        let rooms = vec![Shelf::new(1, 1), Shelf::new(1, 1)];
        assert_eq!(
            Warehouse::new(topology, rooms).unwrap_err(),
            TopologyError::MissingRooms {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_register_and_duplicate() {
        let mut warehouse = three_room_warehouse();
        assert!(warehouse.register("A"));
        assert!(!warehouse.register("A"));
        assert_eq!(warehouse.query_count("A"), Some(0));
        assert_eq!(warehouse.query_count("B"), None);
        assert!(warehouse.is_registered("A"));
        assert!(!warehouse.is_registered("B"));
    }

    #[test]
    fn test_unregister_requires_zero_stock() {
        let mut warehouse = three_room_warehouse();
        warehouse.register("A");
        warehouse.place_in_room(1, &pid("A"), 1).unwrap();

        assert!(!warehouse.unregister("A"));
        assert!(warehouse.is_registered("A"));

        warehouse.remove_from_room(1, &pid("A"), 1).unwrap();
        assert!(warehouse.unregister("A"));
        assert!(!warehouse.is_registered("A"));

        // Unknown products cannot be unregistered either.
        assert!(!warehouse.unregister("B"));
    }

    #[test]
    fn test_place_in_room_credits_only_what_fit() {
        let mut warehouse = three_room_warehouse();
        warehouse.register("A");

        // Capacity 2: three requested, one left over, registry credits 2.
        let leftover = warehouse.place_in_room(1, &pid("A"), 3).unwrap();
        assert_eq!(leftover, 1);
        assert_eq!(warehouse.query_count("A"), Some(2));
        warehouse.assert_registry_consistent();
    }

    #[test]
    fn test_remove_from_room_debits_only_what_was_there() {
        let mut warehouse = three_room_warehouse();
        warehouse.register("A");
        warehouse.place_in_room(1, &pid("A"), 2).unwrap();

        let shortfall = warehouse.remove_from_room(1, &pid("A"), 5).unwrap();
        assert_eq!(shortfall, 3);
        assert_eq!(warehouse.query_count("A"), Some(0));
        warehouse.assert_registry_consistent();
    }

    #[test]
    fn test_unknown_product_is_an_error_without_mutation() {
        let mut warehouse = three_room_warehouse();
        warehouse.register("A");

        assert!(matches!(
            warehouse.place_in_room(1, &pid("B"), 1),
            Err(WarehouseError::UnknownProduct(p)) if p == pid("B")
        ));
        assert!(matches!(
            warehouse.remove_from_room(1, &pid("B"), 1),
            Err(WarehouseError::UnknownProduct(_))
        ));
        assert!(matches!(
            warehouse.distribute(&pid("B"), 1),
            Err(WarehouseError::UnknownProduct(_))
        ));
        assert_eq!(warehouse.occupied(), 0);
    }

    #[test]
    fn test_room_id_is_validated() {
        let mut warehouse = three_room_warehouse();
        warehouse.register("A");

        for bad in [0, 4] {
            assert!(matches!(
                warehouse.place_in_room(bad, &pid("A"), 1),
                Err(WarehouseError::RoomOutOfRange { room, num_rooms: 3 }) if room == bad
            ));
        }
        assert!(matches!(
            warehouse.compact(9),
            Err(WarehouseError::RoomOutOfRange { .. })
        ));
    }

    #[test]
    fn test_distribute_spec_scenario() {
        let mut warehouse = three_room_warehouse();
        warehouse.register("A");

        let overflow = warehouse.distribute(&pid("A"), 5).unwrap();
        assert_eq!(overflow, 0);
        assert_eq!(warehouse.query_count("A"), Some(5));
        assert_eq!(warehouse.room(1).unwrap().count_of(&pid("A")), 2);
        assert_eq!(warehouse.room(2).unwrap().count_of(&pid("A")), 1);
        assert_eq!(warehouse.room(3).unwrap().count_of(&pid("A")), 2);
        warehouse.assert_registry_consistent();
    }

    #[test]
    fn test_distribute_credits_only_placed_items() {
        let mut warehouse = three_room_warehouse();
        warehouse.register("A");

        // Capacity 6 in total; 10 requested.
        let overflow = warehouse.distribute(&pid("A"), 10).unwrap();
        assert_eq!(overflow, 4);
        assert_eq!(warehouse.query_count("A"), Some(6));
        assert_eq!(warehouse.occupied(), warehouse.capacity());
        warehouse.assert_registry_consistent();
    }

    #[test]
    fn test_position_and_write_room() {
        let mut warehouse = three_room_warehouse();
        warehouse.register("A");
        warehouse.place_in_room(2, &pid("A"), 1).unwrap();

        assert_eq!(warehouse.position(2, 1, 1).unwrap().product(), Some(&pid("A")));
        assert!(warehouse.position(2, 1, 2).unwrap().is_empty());
        assert!(matches!(
            warehouse.position(2, 2, 1),
            Err(WarehouseError::CoordinatesOutOfRange { f: 2, c: 1, .. })
        ));

        let mut out = Vec::new();
        warehouse.write_room(2, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A NULL\n");
    }

    #[test]
    fn test_inventory_is_sorted_and_includes_zero_stock() {
        let mut warehouse = three_room_warehouse();
        warehouse.register("pallet");
        warehouse.register("anchor");
        warehouse.register("crate");
        warehouse.place_in_room(1, &pid("crate"), 1).unwrap();

        let snapshot: Vec<(&str, usize)> = warehouse
            .inventory()
            .map(|(product, count)| (product.as_str(), count))
            .collect();
        assert_eq!(snapshot, [("anchor", 0), ("crate", 1), ("pallet", 0)]);
    }

    #[test]
    fn test_shelf_maintenance_keeps_registry_untouched() {
        let mut warehouse = three_room_warehouse();
        warehouse.register("b");
        warehouse.register("a");
        warehouse.place_in_room(1, &pid("b"), 1).unwrap();
        warehouse.place_in_room(1, &pid("a"), 1).unwrap();

        warehouse.reorganize(1).unwrap();
        warehouse.compact(1).unwrap();
        assert!(warehouse.resize(1, 2, 2).unwrap());
        assert!(!warehouse.resize(1, 1, 1).unwrap());

        assert_eq!(warehouse.query_count("a"), Some(1));
        assert_eq!(warehouse.query_count("b"), Some(1));
        warehouse.assert_registry_consistent();
    }

    #[test]
    fn test_randomized_operations_keep_registry_consistent() {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(0xA151E5);
        let mut warehouse = three_room_warehouse();
        let products: Vec<ProductId> = ["a", "b", "c"].into_iter().map(pid).collect();
        for product in &products {
            warehouse.register(product.clone());
        }

        for _ in 0..400 {
            let product = &products[rng.gen_range(0..products.len())];
            let room = rng.gen_range(1..=3);
            match rng.gen_range(0..6) {
                0 | 1 => {
                    let quantity = rng.gen_range(0..5);
                    warehouse.place_in_room(room, product, quantity).unwrap();
                }
                2 => {
                    let quantity = rng.gen_range(0..5);
                    warehouse.remove_from_room(room, product, quantity).unwrap();
                }
                3 => {
                    warehouse.distribute(product, rng.gen_range(0..8)).unwrap();
                }
                4 => warehouse.reorganize(room).unwrap(),
                _ => warehouse.compact(room).unwrap(),
            }
            warehouse.assert_registry_consistent();
        }
    }
}
