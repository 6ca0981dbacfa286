//! Well-known outcome codes.
//!
//! Codes are stable identifiers other components key off of. New codes may be
//! added; existing values never change.

/// A fake failure, for tests.
pub const FAKE_ERROR: &str = "fake_error";

/// The operation succeeded.
pub const OPERATION_SUCCEEDED: &str = "operation_succeeded";

/// The operation failed.
pub const OPERATION_FAILED: &str = "operation_failed";

/// The operation failed because an error was raised.
pub const OPERATION_FAILED_EXCEPTION: &str = "operation_failed_exception";

/// The operation failed due to an internal error.
pub const INTERNAL_EXCEPTION: &str = "internal_exception";

/// The caller is not authenticated.
pub const UNAUTHORIZED: &str = "unauthorized";

/// The caller lacks permission for the action.
pub const FORBIDDEN: &str = "forbidden";

/// The requested resource cannot be found.
pub const NOT_FOUND: &str = "not_found";

pub const INVALID_LOGIN_CREDENTIALS: &str = "invalid_login_credentials";

pub const RESOURCE_ALREADY_EXIST: &str = "resource_already_exist";

/// The resource was already processed; no reprocessing needed.
pub const RESOURCE_ALREADY_PROCESSED: &str = "resource_already_processed";

pub const VALIDATION_FAILED: &str = "validation_failed";

/// Saving to the backing store failed.
pub const DATA_PERSISTENCE_FAILED: &str = "data_persistence_failed";

/// The resource was cancelled and cannot be processed.
pub const RESOURCE_CANCELED: &str = "resource_canceled";

pub const AUTHENTICATION_FAILED: &str = "authentication_failed";

/// A downstream service could not be reached.
pub const SERVICE_CONNECTION_FAILED: &str = "service_connection_failed";

pub const PASSWORD_REQUIRED: &str = "password_required";

pub const EMAIL_REQUIRED: &str = "email_required";

pub const INVALID_EMAIL: &str = "invalid_email";

pub const UNSUPPORTED_ACTION_TYPE: &str = "un_supported_action_type";

pub const USER_WITH_EMAIL_NOT_EXIST: &str = "user_with_email_not_exist";

pub const INVALID_USER_PASSWORD: &str = "invalid_user_password";

pub const USER_ACCOUNT_BLOCKED: &str = "user_account_blocked";

pub const USER_ACCOUNT_DEACTIVATED: &str = "user_account_deactivated";

pub const INVALID_PROPERTY_VALUE: &str = "invalid_property_value";

// Contract violations raised by this crate.

/// No constructor is registered for a typed error conversion.
pub const EXCEPTION_MAPPING_NOT_FOUND: &str = "exception_mapping_not_found";

/// A localized message was requested but no lookup function is configured.
pub const LOCALIZATION_METHOD_NOT_IMPLEMENTED: &str =
    "localization_get_text_method_not_implemented";

/// The lookup has no text for the requested code.
pub const LOCALIZATION_NOT_FOUND: &str = "text_code_localization_not_found";

/// A localized message was requested without a text code.
pub const TEXT_CODE_NOT_SPECIFIED: &str = "result_text_code_not_specified";

/// Metadata was attached with an empty key.
pub const METADATA_KEY_NOT_SPECIFIED: &str = "metadata_key_not_specified";
