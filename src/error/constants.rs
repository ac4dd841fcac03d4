use super::const_error;

const_error!(
    INTERNAL,
    INTERNAL_SERVER_ERROR,
    "internal",
    "internal server error"
);
const_error!(
    DATABASE_ERROR,
    INTERNAL_SERVER_ERROR,
    "database-error",
    "database error"
);
const_error!(
    JSON_MISSING_FIELDS,
    UNPROCESSABLE_ENTITY,
    "json-missing-fields",
    "missing fields"
);
const_error!(JSON_SYNTAX_ERROR, BAD_REQUEST, "json-syntax-error", "syntax error");
const_error!(
    JSON_CONTENT_TYPE,
    BAD_REQUEST,
    "json-content-type",
    "missing or wrong content-type"
);
const_error!(
    JSON_VALIDATE_INVALID,
    BAD_REQUEST,
    "json-validate-invalid",
    "invalid data"
);
const_error!(
    COULD_NOT_GET_CLAIMS,
    UNAUTHORIZED,
    "could-not-get-claims",
    "could not get claims"
);
const_error!(
    UNKNOWN_USER,
    UNAUTHORIZED,
    "unknown-user",
    "user no longer exists"
);
const_error!(
    DUPLICATE_USERNAME,
    BAD_REQUEST,
    "duplicate-username",
    "username already exists"
);
const_error!(
    INVALID_CREDENTIALS,
    BAD_REQUEST,
    "invalid-credentials",
    "wrong username or password"
);
const_error!(
    QUESTION_NOT_FOUND,
    NOT_FOUND,
    "question-not-found",
    "question not found"
);
