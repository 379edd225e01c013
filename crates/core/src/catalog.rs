//! Stable client-facing error vocabulary.
//!
//! Every error the facade can emit is an [`ErrorEntry`] declared here. Codes
//! are stable across releases and unique within the catalog. The
//! [`ErrorCatalog`] registry maps structural-validation failures (by field
//! name, by full namespace, or by tag) onto these entries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A static `(code, message)` pair from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorEntry {
    code: &'static str,
    message: &'static str,
}

impl ErrorEntry {
    pub const fn new(code: &'static str, message: &'static str) -> Self {
        Self { code, message }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Render with empty details.
    pub fn to_message(&self) -> ErrorMessage {
        self.with_details(String::new())
    }

    pub fn with_details(&self, details: impl Into<String>) -> ErrorMessage {
        ErrorMessage {
            code: self.code.to_owned(),
            message: self.message.to_owned(),
            details: details.into(),
        }
    }
}

/// The `{code, message, details}` body every failure renders as.
///
/// Also the shape the backend uses for its own business errors, which are
/// relayed without rewriting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: String,
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

pub const UNKNOWN: ErrorEntry = ErrorEntry::new("ma000001", "unknown error. try request later");
pub const VALIDATION_FAILED: ErrorEntry = ErrorEntry::new("ma000002", "validation failed");
pub const INTERNAL: ErrorEntry = ErrorEntry::new("ma000003", "internal error");
pub const ACCESS_DENIED: ErrorEntry = ErrorEntry::new("ma000004", "access denied");
pub const ID_IS_EMPTY: ErrorEntry = ErrorEntry::new("ma000005", "identifier can't be empty");
pub const INCORRECT_MERCHANT_ID: ErrorEntry =
    ErrorEntry::new("ma000006", "incorrect merchant identifier");
pub const INCORRECT_NOTIFICATION_ID: ErrorEntry =
    ErrorEntry::new("ma000007", "incorrect notification identifier");
pub const INCORRECT_ORDER_ID: ErrorEntry = ErrorEntry::new("ma000008", "incorrect order identifier");
pub const INCORRECT_PRODUCT_ID: ErrorEntry =
    ErrorEntry::new("ma000009", "incorrect product identifier");
pub const INCORRECT_COUNTRY: ErrorEntry = ErrorEntry::new("ma000010", "incorrect country identifier");
pub const INCORRECT_CURRENCY: ErrorEntry =
    ErrorEntry::new("ma000011", "incorrect currency identifier");
pub const ORDERS_NOT_FOUND: ErrorEntry = ErrorEntry::new("ma000012", "orders not found");
pub const COUNTRY_NOT_FOUND: ErrorEntry = ErrorEntry::new("ma000013", "country not found");
pub const CURRENCY_NOT_FOUND: ErrorEntry = ErrorEntry::new("ma000014", "currency not found");
pub const NOTIFICATION_NOT_FOUND: ErrorEntry = ErrorEntry::new("ma000015", "notification not found");
pub const AGREEMENT_CAN_NOT_BE_GENERATED: ErrorEntry = ErrorEntry::new(
    "ma000020",
    "agreement can't be generated for not checked merchant data",
);
pub const AGREEMENT_NOT_GENERATED: ErrorEntry =
    ErrorEntry::new("ma000021", "agreement for merchant not generated early");
pub const SIGNATURE_HEADER_IS_EMPTY: ErrorEntry =
    ErrorEntry::new("ma000022", "header with request signature can't be empty");
pub const REQUEST_PARAMS_INCORRECT: ErrorEntry =
    ErrorEntry::new("ma000023", "incorrect request parameters");
pub const INCORRECT_EMAIL: ErrorEntry = ErrorEntry::new("ma000024", "incorrect email");
pub const REQUEST_DATA_INVALID: ErrorEntry = ErrorEntry::new("ma000026", "request data invalid");
pub const COUNTRIES_LIST_ERROR: ErrorEntry = ErrorEntry::new("ma000027", "countries list error");
pub const AGREEMENT_FILE_NOT_EXIST: ErrorEntry =
    ErrorEntry::new("ma000028", "file for the specified key does not exist");
pub const NOT_MULTIPART_FORM: ErrorEntry =
    ErrorEntry::new("ma000029", "no multipart boundary param in Content-Type");
pub const UPLOAD_FAILED: ErrorEntry = ErrorEntry::new("ma000030", "upload failed");
pub const INCORRECT_PROJECT_ID: ErrorEntry =
    ErrorEntry::new("ma000031", "incorrect project identifier");
pub const INCORRECT_PAYMENT_METHOD_ID: ErrorEntry =
    ErrorEntry::new("ma000032", "incorrect payment method identifier");
pub const INCORRECT_PAYLINK_ID: ErrorEntry =
    ErrorEntry::new("ma000033", "incorrect paylink identifier");
pub const AUTHORIZATION_HEADER_NOT_FOUND: ErrorEntry =
    ErrorEntry::new("ma000034", "authorization header not found");
pub const AUTHORIZATION_TOKEN_NOT_FOUND: ErrorEntry =
    ErrorEntry::new("ma000035", "authorization token not found");
pub const AUTHORIZED_USER_NOT_FOUND: ErrorEntry =
    ErrorEntry::new("ma000036", "information about authorized user not found");
pub const STATUS_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000037", "status parameter has incorrect type");
pub const AGREEMENT_NOT_FOUND: ErrorEntry =
    ErrorEntry::new("ma000038", "agreement for merchant not found");
pub const AGREEMENT_UPLOAD_MAX_SIZE: ErrorEntry =
    ErrorEntry::new("ma000039", "agreement document max upload size exceeded");
pub const AGREEMENT_CONTENT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000040", "agreement document type must be a pdf");
pub const AGREEMENT_TYPE_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000041", "agreement type parameter have incorrect type");
pub const HAS_MERCHANT_SIGNATURE_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000042", "merchant signature parameter has incorrect type");
pub const HAS_PSP_SIGNATURE_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000043", "paysuper signature parameter has incorrect type");
pub const AGREEMENT_SENT_VIA_MAIL_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000044", "agreement sent via email parameter has incorrect type");
pub const MAIL_TRACKING_LINK_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000045", "mail tracking link parameter has incorrect type");
pub const NAME_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000046", "name parameter has incorrect type");
pub const IMAGE_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000047", "image parameter has incorrect type");
pub const CALLBACK_CURRENCY_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000048", "callback currency parameter has incorrect type");
pub const CALLBACK_PROTOCOL_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000049", "callback protocol parameter has incorrect type");
pub const CREATE_ORDER_ALLOWED_URLS_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000050", "create order allowed urls parameter has incorrect type");
pub const ALLOW_DYNAMIC_NOTIFY_URLS_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000051", "allow dynamic notify urls parameter has incorrect type");
pub const ALLOW_DYNAMIC_REDIRECT_URLS_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000052", "allow dynamic redirect urls parameter has incorrect type");
pub const LIMITS_CURRENCY_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000053", "limits currency parameter has incorrect type");
pub const MIN_PAYMENT_AMOUNT_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000054", "min payment amount parameter has incorrect type");
pub const MAX_PAYMENT_AMOUNT_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000055", "max payment amount parameter has incorrect type");
pub const NOTIFY_EMAILS_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000056", "notify emails parameter has incorrect type");
pub const IS_PRODUCTS_CHECKOUT_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000057", "is products checkout parameter has incorrect type");
pub const SECRET_KEY_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000058", "secret key parameter has incorrect type");
pub const SIGNATURE_REQUIRED_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000059", "signature required parameter has incorrect type");
pub const SEND_NOTIFY_EMAIL_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000060", "send notify email parameter has incorrect type");
pub const URL_CHECK_ACCOUNT_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000061", "url check account parameter has incorrect type");
pub const URL_PROCESS_PAYMENT_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000062", "url process payment parameter has incorrect type");
pub const URL_REDIRECT_FAIL_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000063", "url redirect fail parameter has incorrect type");
pub const URL_REDIRECT_SUCCESS_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000064", "url redirect success parameter has incorrect type");
pub const URL_CHARGEBACK_PAYMENT_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000065", "url chargeback payment parameter has incorrect type");
pub const URL_CANCEL_PAYMENT_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000066", "url cancel payment parameter has incorrect type");
pub const URL_FRAUD_PAYMENT_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000067", "url fraud payment parameter has incorrect type");
pub const URL_REFUND_PAYMENT_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000068", "url refund payment parameter has incorrect type");
pub const PRICE_GROUP_BY_COUNTRY: ErrorEntry =
    ErrorEntry::new("ma000069", "unable to get price group by country");
pub const PRICE_GROUP_CURRENCY_LIST: ErrorEntry =
    ErrorEntry::new("ma000070", "unable to get price group currencies");
pub const PRICE_GROUP_CURRENCY_BY_REGION: ErrorEntry =
    ErrorEntry::new("ma000071", "unable to get price group currency by region");
pub const PRICE_GROUP_RECOMMENDED_LIST: ErrorEntry =
    ErrorEntry::new("ma000072", "unable to get price group recommended prices");
pub const INCORRECT_ZIP: ErrorEntry = ErrorEntry::new("ma000073", "incorrect zip code");
pub const INCORRECT_NUMBER_OF_EMPLOYEES: ErrorEntry =
    ErrorEntry::new("ma000074", "incorrect number of employees value");
pub const INCORRECT_ANNUAL_INCOME: ErrorEntry =
    ErrorEntry::new("ma000075", "incorrect annual income value");
pub const INCORRECT_COMPANY_NAME: ErrorEntry = ErrorEntry::new("ma000076", "incorrect company name");
pub const INCORRECT_POSITION: ErrorEntry = ErrorEntry::new("ma000077", "incorrect position");
pub const INCORRECT_FIRST_NAME: ErrorEntry = ErrorEntry::new("ma000078", "incorrect first name");
pub const INCORRECT_LAST_NAME: ErrorEntry = ErrorEntry::new("ma000079", "incorrect last name");
pub const INCORRECT_WEBSITE: ErrorEntry = ErrorEntry::new("ma000080", "incorrect website");
pub const INCORRECT_KIND_OF_ACTIVITY: ErrorEntry =
    ErrorEntry::new("ma000081", "incorrect kind of activity");
pub const INCORRECT_REVIEW: ErrorEntry = ErrorEntry::new(
    "ma000082",
    "review must be text with length lower than or equal 500 characters",
);
pub const INCORRECT_PAGE_ID: ErrorEntry = ErrorEntry::new(
    "ma000083",
    "review page identifier must be one of next values: primary_onboarding, merchant_onboarding",
);
pub const INCORRECT_ALTERNATIVE_NAME: ErrorEntry = ErrorEntry::new("ma000084", "incorrect brand");
pub const INCORRECT_STATE: ErrorEntry = ErrorEntry::new("ma000085", "incorrect state");
pub const INCORRECT_CITY: ErrorEntry = ErrorEntry::new("ma000086", "incorrect city");
pub const INCORRECT_ADDRESS: ErrorEntry = ErrorEntry::new("ma000087", "incorrect address");
pub const REQUIRED_CONTACT_AUTHORIZED: ErrorEntry =
    ErrorEntry::new("ma000088", "company authorized contact information is required");
pub const REQUIRED_CONTACT_TECHNICAL: ErrorEntry =
    ErrorEntry::new("ma000089", "company technical contact information is required");
pub const INCORRECT_NAME: ErrorEntry = ErrorEntry::new("ma000090", "incorrect name");
pub const INCORRECT_PHONE: ErrorEntry = ErrorEntry::new("ma000091", "incorrect phone");
pub const INCORRECT_BANK_NAME: ErrorEntry = ErrorEntry::new("ma000092", "incorrect bank name");
pub const INCORRECT_BANK_ADDRESS: ErrorEntry = ErrorEntry::new("ma000093", "incorrect bank address");
pub const INCORRECT_BANK_ACCOUNT_NUMBER: ErrorEntry =
    ErrorEntry::new("ma000094", "incorrect bank accounting number");
pub const INCORRECT_BANK_SWIFT: ErrorEntry = ErrorEntry::new("ma000095", "incorrect bank swift code");
pub const INCORRECT_BANK_CORRESPONDENT_ACCOUNT: ErrorEntry =
    ErrorEntry::new("ma000096", "incorrect bank correspondent account");
pub const FILE_NOT_FOUND: ErrorEntry = ErrorEntry::new("ma000097", "file with key was not specified");
pub const CANT_READ_FILE: ErrorEntry = ErrorEntry::new("ma000098", "file can not be read");
pub const INCORRECT_PERIOD: ErrorEntry = ErrorEntry::new("ma000099", "incorrect period");
pub const MERCHANT_NOT_FOUND: ErrorEntry = ErrorEntry::new("ma000100", "merchant not found");
pub const CREATE_REPORT_FILE: ErrorEntry = ErrorEntry::new("ma000101", "unable to create report file");
pub const DOWNLOAD_REPORT_FILE: ErrorEntry =
    ErrorEntry::new("ma000102", "unable to download report file");
pub const LOCALIZED_FIELD_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000103", "localized field has invalid type");
pub const COVER_FIELD_INCORRECT_TYPE: ErrorEntry =
    ErrorEntry::new("ma000104", "cover field has invalid type");
pub const UNABLE_TO_SEND_INVITE: ErrorEntry = ErrorEntry::new("ma000105", "unable to send invite");
pub const UNABLE_TO_ACCEPT_INVITE: ErrorEntry = ErrorEntry::new("ma000106", "unable to accept invite");
pub const UNABLE_TO_CHECK_INVITE_TOKEN: ErrorEntry =
    ErrorEntry::new("ma000107", "unable to check invite token");
pub const INVALID_ROLE_TYPE: ErrorEntry = ErrorEntry::new("ma000108", "invalid role type");
pub const UNABLE_TO_DELETE_USER: ErrorEntry = ErrorEntry::new("ma000109", "unable to delete user");
pub const GET_PRODUCT_PRICE: ErrorEntry = ErrorEntry::new("ma000110", "unable to get price of product");
pub const UPDATE_PRODUCT_PRICE: ErrorEntry =
    ErrorEntry::new("ma000111", "unable to update price of product");
pub const KEY_PRODUCT_ID_INVALID: ErrorEntry = ErrorEntry::new("ma000112", "key product id is invalid");
pub const PLATFORM_ID_INVALID: ErrorEntry = ErrorEntry::new("ma000113", "platform id is invalid");

/// Every entry, in code order.
pub const ALL_ENTRIES: &[ErrorEntry] = &[
    UNKNOWN,
    VALIDATION_FAILED,
    INTERNAL,
    ACCESS_DENIED,
    ID_IS_EMPTY,
    INCORRECT_MERCHANT_ID,
    INCORRECT_NOTIFICATION_ID,
    INCORRECT_ORDER_ID,
    INCORRECT_PRODUCT_ID,
    INCORRECT_COUNTRY,
    INCORRECT_CURRENCY,
    ORDERS_NOT_FOUND,
    COUNTRY_NOT_FOUND,
    CURRENCY_NOT_FOUND,
    NOTIFICATION_NOT_FOUND,
    AGREEMENT_CAN_NOT_BE_GENERATED,
    AGREEMENT_NOT_GENERATED,
    SIGNATURE_HEADER_IS_EMPTY,
    REQUEST_PARAMS_INCORRECT,
    INCORRECT_EMAIL,
    REQUEST_DATA_INVALID,
    COUNTRIES_LIST_ERROR,
    AGREEMENT_FILE_NOT_EXIST,
    NOT_MULTIPART_FORM,
    UPLOAD_FAILED,
    INCORRECT_PROJECT_ID,
    INCORRECT_PAYMENT_METHOD_ID,
    INCORRECT_PAYLINK_ID,
    AUTHORIZATION_HEADER_NOT_FOUND,
    AUTHORIZATION_TOKEN_NOT_FOUND,
    AUTHORIZED_USER_NOT_FOUND,
    STATUS_INCORRECT_TYPE,
    AGREEMENT_NOT_FOUND,
    AGREEMENT_UPLOAD_MAX_SIZE,
    AGREEMENT_CONTENT_TYPE,
    AGREEMENT_TYPE_INCORRECT_TYPE,
    HAS_MERCHANT_SIGNATURE_INCORRECT_TYPE,
    HAS_PSP_SIGNATURE_INCORRECT_TYPE,
    AGREEMENT_SENT_VIA_MAIL_INCORRECT_TYPE,
    MAIL_TRACKING_LINK_INCORRECT_TYPE,
    NAME_INCORRECT_TYPE,
    IMAGE_INCORRECT_TYPE,
    CALLBACK_CURRENCY_INCORRECT_TYPE,
    CALLBACK_PROTOCOL_INCORRECT_TYPE,
    CREATE_ORDER_ALLOWED_URLS_INCORRECT_TYPE,
    ALLOW_DYNAMIC_NOTIFY_URLS_INCORRECT_TYPE,
    ALLOW_DYNAMIC_REDIRECT_URLS_INCORRECT_TYPE,
    LIMITS_CURRENCY_INCORRECT_TYPE,
    MIN_PAYMENT_AMOUNT_INCORRECT_TYPE,
    MAX_PAYMENT_AMOUNT_INCORRECT_TYPE,
    NOTIFY_EMAILS_INCORRECT_TYPE,
    IS_PRODUCTS_CHECKOUT_INCORRECT_TYPE,
    SECRET_KEY_INCORRECT_TYPE,
    SIGNATURE_REQUIRED_INCORRECT_TYPE,
    SEND_NOTIFY_EMAIL_INCORRECT_TYPE,
    URL_CHECK_ACCOUNT_INCORRECT_TYPE,
    URL_PROCESS_PAYMENT_INCORRECT_TYPE,
    URL_REDIRECT_FAIL_INCORRECT_TYPE,
    URL_REDIRECT_SUCCESS_INCORRECT_TYPE,
    URL_CHARGEBACK_PAYMENT_INCORRECT_TYPE,
    URL_CANCEL_PAYMENT_INCORRECT_TYPE,
    URL_FRAUD_PAYMENT_INCORRECT_TYPE,
    URL_REFUND_PAYMENT_INCORRECT_TYPE,
    PRICE_GROUP_BY_COUNTRY,
    PRICE_GROUP_CURRENCY_LIST,
    PRICE_GROUP_CURRENCY_BY_REGION,
    PRICE_GROUP_RECOMMENDED_LIST,
    INCORRECT_ZIP,
    INCORRECT_NUMBER_OF_EMPLOYEES,
    INCORRECT_ANNUAL_INCOME,
    INCORRECT_COMPANY_NAME,
    INCORRECT_POSITION,
    INCORRECT_FIRST_NAME,
    INCORRECT_LAST_NAME,
    INCORRECT_WEBSITE,
    INCORRECT_KIND_OF_ACTIVITY,
    INCORRECT_REVIEW,
    INCORRECT_PAGE_ID,
    INCORRECT_ALTERNATIVE_NAME,
    INCORRECT_STATE,
    INCORRECT_CITY,
    INCORRECT_ADDRESS,
    REQUIRED_CONTACT_AUTHORIZED,
    REQUIRED_CONTACT_TECHNICAL,
    INCORRECT_NAME,
    INCORRECT_PHONE,
    INCORRECT_BANK_NAME,
    INCORRECT_BANK_ADDRESS,
    INCORRECT_BANK_ACCOUNT_NUMBER,
    INCORRECT_BANK_SWIFT,
    INCORRECT_BANK_CORRESPONDENT_ACCOUNT,
    FILE_NOT_FOUND,
    CANT_READ_FILE,
    INCORRECT_PERIOD,
    MERCHANT_NOT_FOUND,
    CREATE_REPORT_FILE,
    DOWNLOAD_REPORT_FILE,
    LOCALIZED_FIELD_INCORRECT_TYPE,
    COVER_FIELD_INCORRECT_TYPE,
    UNABLE_TO_SEND_INVITE,
    UNABLE_TO_ACCEPT_INVITE,
    UNABLE_TO_CHECK_INVITE_TOKEN,
    INVALID_ROLE_TYPE,
    UNABLE_TO_DELETE_USER,
    GET_PRODUCT_PRICE,
    UPDATE_PRODUCT_PRICE,
    KEY_PRODUCT_ID_INVALID,
    PLATFORM_ID_INVALID,
];

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Immutable lookup tables used to translate validation failures.
///
/// Built once at startup and shared read-only; there is no mutation after
/// [`ErrorCatalogBuilder::build`].
#[derive(Debug, Clone)]
pub struct ErrorCatalog {
    fields: HashMap<&'static str, ErrorEntry>,
    namespaces: HashMap<&'static str, ErrorEntry>,
    tags: HashMap<&'static str, ErrorEntry>,
    fallback: ErrorEntry,
}

impl ErrorCatalog {
    pub fn builder() -> ErrorCatalogBuilder {
        ErrorCatalogBuilder::default()
    }

    /// The production registry.
    ///
    /// Field keys are bare field names and win over everything else, so a
    /// field name must only be registered here when it means the same thing
    /// in every request shape.
    pub fn standard() -> Self {
        Self::builder()
            .field("number_of_employees", INCORRECT_NUMBER_OF_EMPLOYEES)
            .field("annual_income", INCORRECT_ANNUAL_INCOME)
            .field("company_name", INCORRECT_COMPANY_NAME)
            .field("position", INCORRECT_POSITION)
            .field("first_name", INCORRECT_FIRST_NAME)
            .field("last_name", INCORRECT_LAST_NAME)
            .field("website", INCORRECT_WEBSITE)
            .field("kind_of_activity", INCORRECT_KIND_OF_ACTIVITY)
            .field("review", INCORRECT_REVIEW)
            .field("page_id", INCORRECT_PAGE_ID)
            .namespace("OnboardingRequest.company.name", INCORRECT_COMPANY_NAME)
            .namespace("OnboardingRequest.company.alternative_name", INCORRECT_ALTERNATIVE_NAME)
            .namespace("OnboardingRequest.company.website", INCORRECT_WEBSITE)
            .namespace("OnboardingRequest.company.country", INCORRECT_COUNTRY)
            .namespace("OnboardingRequest.company.state", INCORRECT_STATE)
            .namespace("OnboardingRequest.company.zip", INCORRECT_ZIP)
            .namespace("OnboardingRequest.company.city", INCORRECT_CITY)
            .namespace("OnboardingRequest.company.address", INCORRECT_ADDRESS)
            .namespace("OnboardingRequest.contacts.authorized", REQUIRED_CONTACT_AUTHORIZED)
            .namespace("OnboardingRequest.contacts.technical", REQUIRED_CONTACT_TECHNICAL)
            .namespace("OnboardingRequest.contacts.authorized.name", INCORRECT_NAME)
            .namespace("OnboardingRequest.contacts.authorized.email", INCORRECT_EMAIL)
            .namespace("OnboardingRequest.contacts.authorized.phone", INCORRECT_PHONE)
            .namespace("OnboardingRequest.contacts.authorized.position", INCORRECT_POSITION)
            .namespace("OnboardingRequest.contacts.technical.name", INCORRECT_NAME)
            .namespace("OnboardingRequest.contacts.technical.email", INCORRECT_EMAIL)
            .namespace("OnboardingRequest.contacts.technical.phone", INCORRECT_PHONE)
            .namespace("OnboardingRequest.banking.currency", INCORRECT_CURRENCY)
            .namespace("OnboardingRequest.banking.name", INCORRECT_BANK_NAME)
            .namespace("OnboardingRequest.banking.address", INCORRECT_BANK_ADDRESS)
            .namespace("OnboardingRequest.banking.account_number", INCORRECT_BANK_ACCOUNT_NUMBER)
            .namespace("OnboardingRequest.banking.swift", INCORRECT_BANK_SWIFT)
            .namespace(
                "OnboardingRequest.banking.correspondent_account",
                INCORRECT_BANK_CORRESPONDENT_ACCOUNT,
            )
            .namespace("ChangeMerchantDataRequest.merchant_id", INCORRECT_MERCHANT_ID)
            .namespace("ListNotificationsRequest.merchant_id", INCORRECT_MERCHANT_ID)
            .namespace("ListProjectsRequest.merchant_id", INCORRECT_MERCHANT_ID)
            .namespace("Project.merchant_id", INCORRECT_MERCHANT_ID)
            .namespace("GetProjectRequest.merchant_id", INCORRECT_MERCHANT_ID)
            .tag("zip_usa", INCORRECT_ZIP)
            .fallback(VALIDATION_FAILED)
            .build()
    }

    pub fn by_field(&self, field: &str) -> Option<ErrorEntry> {
        self.fields.get(field).copied()
    }

    pub fn by_namespace(&self, namespace: &str) -> Option<ErrorEntry> {
        self.namespaces.get(namespace).copied()
    }

    pub fn by_tag(&self, tag: &str) -> Option<ErrorEntry> {
        self.tags.get(tag).copied()
    }

    /// Entry used when no table matches.
    pub fn fallback(&self) -> ErrorEntry {
        self.fallback
    }
}

impl Default for ErrorCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builder for [`ErrorCatalog`].
#[derive(Debug)]
pub struct ErrorCatalogBuilder {
    fields: HashMap<&'static str, ErrorEntry>,
    namespaces: HashMap<&'static str, ErrorEntry>,
    tags: HashMap<&'static str, ErrorEntry>,
    fallback: ErrorEntry,
}

impl Default for ErrorCatalogBuilder {
    fn default() -> Self {
        Self {
            fields: HashMap::new(),
            namespaces: HashMap::new(),
            tags: HashMap::new(),
            fallback: VALIDATION_FAILED,
        }
    }
}

impl ErrorCatalogBuilder {
    pub fn field(mut self, field: &'static str, entry: ErrorEntry) -> Self {
        self.fields.insert(field, entry);
        self
    }

    pub fn namespace(mut self, namespace: &'static str, entry: ErrorEntry) -> Self {
        self.namespaces.insert(namespace, entry);
        self
    }

    pub fn tag(mut self, tag: &'static str, entry: ErrorEntry) -> Self {
        self.tags.insert(tag, entry);
        self
    }

    pub fn fallback(mut self, entry: ErrorEntry) -> Self {
        self.fallback = entry;
        self
    }

    pub fn build(self) -> ErrorCatalog {
        ErrorCatalog {
            fields: self.fields,
            namespaces: self.namespaces,
            tags: self.tags,
            fallback: self.fallback,
        }
    }
}
