use crate::prelude::*;

/// Coerced values of every declared parameter, in declaration order.
/// Parameters that resolved to absent hold [`CoercedValue::Null`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct BoundFields(IndexMap<&'static str, CoercedValue>);

impl BoundFields {
    pub(crate) fn insert(&mut self, name: &'static str, value: CoercedValue) {
        self.0.insert(name, value);
    }

    /// The field `name`, `None` if no such parameter was declared.
    pub fn field(&self, name: &str) -> Option<&CoercedValue> {
        self.0.get(name)
    }

    /// Whether the field is declared but holds no value.
    pub fn is_absent(&self, name: &str) -> bool {
        self.field(name).is_some_and(CoercedValue::is_null)
    }

    /// Overwrites a declared field, used by builders to inject defaults after
    /// binding. Undeclared names are ignored so the field set stays fixed.
    pub fn replace(mut self, name: &str, value: CoercedValue) -> Self {
        if let Some(slot) = self.0.get_mut(name) {
            *slot = value;
        }
        self
    }

    /// Replaces the field with `default` if it is absent.
    pub fn or_default(self, name: &str, default: impl FnOnce() -> CoercedValue) -> Self {
        if self.is_absent(name) {
            self.replace(name, default())
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sut() -> BoundFields {
        let mut sut = BoundFields::default();
        sut.insert("object_id", CoercedValue::String("0x5".to_owned()));
        sut.insert("options", CoercedValue::Null);
        sut
    }

    #[test]
    fn or_default_fills_absent_only() {
        let filled = sut().or_default("options", || CoercedValue::Boolean(true));
        assert_eq!(filled.field("options"), Some(&CoercedValue::Boolean(true)));
        let untouched = filled.or_default("object_id", || CoercedValue::Null);
        assert_eq!(
            untouched.field("object_id"),
            Some(&CoercedValue::String("0x5".to_owned()))
        );
    }

    #[test]
    fn replace_ignores_undeclared() {
        let sut = sut().replace("cursor", CoercedValue::Boolean(true));
        assert_eq!(sut.field("cursor"), None);
        assert_eq!(sut.len(), 2);
    }
}
