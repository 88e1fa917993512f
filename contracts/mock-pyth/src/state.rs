use cw_storage_plus::Item;

/// Mantissa of the mocked price, overriding the default when set.
pub const PRICE: Item<i64> = Item::new("price");
