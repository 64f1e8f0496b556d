//! Validated string fields shared by persons and CCAs.
//!
//! Every field is a newtype over `String` that can only be built through
//! `new`, which checks the value against the field's format rule. Values are
//! never trimmed or normalised here; the parser layer trims input first.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::{Error, Result};

// ─── Format rules ────────────────────────────────────────────────────────────

static NAME_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("valid name regex"));

static PHONE_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));

// local-part@domain. The local part is alphanumeric runs joined by single
// `+_.-` characters; each domain label is alphanumeric runs joined by `-`,
// and the final label is at least two characters long.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(concat!(
    r"^[a-zA-Z0-9]+([+_.\-][a-zA-Z0-9]+)*",
    r"@([a-zA-Z0-9]+(-[a-zA-Z0-9]+)*\.)*",
    r"([a-zA-Z0-9]+(-[a-zA-Z0-9]+)*){2,}$",
  ))
  .expect("valid email regex")
});

static FREE_TEXT_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^\s].*$").expect("valid free-text regex"));

// ─── Newtype generator ───────────────────────────────────────────────────────

macro_rules! validated_string {
  (
    $(#[$meta:meta])*
    $ty:ident, field = $field:literal, rule = $re:ident, message = $msg:literal
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct $ty(String);

    impl $ty {
      pub const MESSAGE_CONSTRAINTS: &'static str = $msg;

      pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if Self::is_valid(&value) {
          Ok(Self(value))
        } else {
          Err(Error::Validation {
            field:   $field,
            message: Self::MESSAGE_CONSTRAINTS,
          })
        }
      }

      pub fn is_valid(value: &str) -> bool { $re.is_match(value) }

      pub fn as_str(&self) -> &str { &self.0 }
    }

    impl fmt::Display for $ty {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }

    impl AsRef<str> for $ty {
      fn as_ref(&self) -> &str { &self.0 }
    }

    impl FromStr for $ty {
      type Err = Error;

      fn from_str(s: &str) -> Result<Self> { Self::new(s) }
    }
  };
}

// ─── Person fields ───────────────────────────────────────────────────────────

validated_string!(
  /// A person's display name.
  Name,
  field = "name",
  rule = NAME_RE,
  message = "Names should only contain alphanumeric characters and spaces, and it should not be blank"
);

validated_string!(
  Phone,
  field = "phone",
  rule = PHONE_RE,
  message = "Phone numbers should only contain numbers, and it should be at least 3 digits long"
);

validated_string!(
  Email,
  field = "email",
  rule = EMAIL_RE,
  message = "Emails should be of the format local-part@domain. The local-part should only contain \
             alphanumeric characters and the special characters +_.-, and may not start or end \
             with a special character. The domain is made of labels separated by periods; each \
             label is alphanumeric characters optionally joined by hyphens, and the last label \
             is at least 2 characters long"
);

validated_string!(
  /// A postal address; free text that must not start with whitespace.
  Address,
  field = "address",
  rule = FREE_TEXT_RE,
  message = "Addresses can take any values, and it should not be blank"
);

// ─── CCA fields ──────────────────────────────────────────────────────────────

validated_string!(
  /// The name of a CCA. Case-sensitive; doubles as the CCA's identity.
  CcaName,
  field = "cca name",
  rule = NAME_RE,
  message = "CCA names should only contain alphanumeric characters and spaces, and it should not be blank"
);

validated_string!(
  /// A person's role within a CCA, e.g. "President" or "Member".
  Role,
  field = "role",
  rule = FREE_TEXT_RE,
  message = "Roles can take any values, and it should not be blank"
);

impl Default for Role {
  fn default() -> Self { Self("Member".to_owned()) }
}
