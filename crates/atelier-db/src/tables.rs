use redb::TableDefinition;

/// Table for storing favorites.
/// Key: artwork document id
/// Value: serialized FavoriteItem as JSON bytes
pub const FAVORITES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("favorites");
