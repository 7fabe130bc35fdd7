pub mod limits {

    /// Maximum length of a trimmed item name, in characters.
    pub const MAX_NAME_LENGTH: usize = 100;

    pub const LATEST_ITEMS: u64 = 10;

    pub const DEFAULT_PAGE_SIZE: u64 = 10;

    pub const MAX_PAGE_SIZE: u64 = 100;
}

pub mod messages {

    pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";

    pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

    pub const VALIDATION_ERROR: &str = "Validation error";

    pub const ITEM_NOT_FOUND: &str = "Item not found";

    pub const ITEM_NOT_FOUND_USE_CREATE: &str =
        "Item not found. Use POST /api/items to record a new item.";

    pub const DUPLICATE_NAME: &str = "An item with this name already exists";
}
