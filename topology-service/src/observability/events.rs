//! Canonical structured event names used across `topology-service`.

// Declare protocol events.
pub const DECLARE_START: &str = "declare_start";
pub const DECLARE_REUSE: &str = "declare_reuse";
pub const DECLARE_PROVISION_OK: &str = "declare_provision_ok";
pub const DECLARE_PERSIST_OK: &str = "declare_persist_ok";
pub const DECLARE_PERSIST_FAILED_AFTER_PROVISION: &str = "declare_persist_failed_after_provision";
pub const SUBSCRIBER_QUEUE_NAME_GENERATED: &str = "subscriber_queue_name_generated";
pub const BINDING_QUEUE_MISSING: &str = "binding_queue_missing";
pub const BINDING_PERSIST_OK: &str = "binding_persist_ok";

// Reverse-lookup and query events.
pub const REVERSE_LOOKUP_SCAN: &str = "reverse_lookup_scan";
pub const REVERSE_LOOKUP_HIT: &str = "reverse_lookup_hit";
pub const REVERSE_LOOKUP_MISS: &str = "reverse_lookup_miss";
pub const QUERY_START: &str = "query_start";
pub const QUERY_DONE: &str = "query_done";

// Undeclare events.
pub const UNDECLARE_ACK_NOOP: &str = "undeclare_ack_noop";
