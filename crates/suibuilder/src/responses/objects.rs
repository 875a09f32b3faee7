use crate::prelude::*;

/// Summary of an object owned by an address.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct ObjectInfo {
    object_id: ObjectId,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    version: u64,
    digest: String,
    #[serde(rename = "type")]
    type_: String,
    owner: Value,
    previous_transaction: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct ObjectInfoList(Vec<ObjectInfo>);

impl Factory for ObjectInfoList {
    fn factory(json: &Value) -> Result<Self> {
        decode_each::<Self, _>(json, decode_value::<ObjectInfo>).map(Self)
    }
}

/// An object as returned by the read methods, which members are present
/// depends on the read options sent.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct ObjectData {
    object_id: ObjectId,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    version: u64,
    digest: String,
    #[serde(rename = "type", default)]
    type_: Option<String>,
    #[serde(default)]
    owner: Option<Value>,
    #[serde(default)]
    previous_transaction: Option<String>,
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    storage_rebate: Option<u64>,
    #[serde(default)]
    display: Option<Value>,
    #[serde(default)]
    content: Option<Value>,
    #[serde(default)]
    bcs: Option<Value>,
}

const VERSION_FOUND: &str = "VersionFound";

/// Outcome of reading one object, current or at a past version.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum ObjectRead {
    /// `{"data": {...}}`
    Found(ObjectData),
    /// `{"error": {"code": "notExists", ...}}`
    Missing { code: String, details: Value },
    /// `{"status": "VersionFound", "details": {...}}`
    PastVersion(ObjectData),
    /// Any other `status`, e.g. `ObjectDeleted` or `VersionTooHigh`.
    PastVersionUnavailable { status: String, details: Value },
}

impl ObjectRead {
    /// The object data, if the read found one.
    pub fn data(&self) -> Option<&ObjectData> {
        match self {
            Self::Found(data) | Self::PastVersion(data) => Some(data),
            _ => None,
        }
    }
}

impl Factory for ObjectRead {
    fn factory(json: &Value) -> Result<Self> {
        let members = expect_object::<Self>(json)?;
        if let Some(data) = members.get("data") {
            return decode_value(data).map(Self::Found);
        }
        if let Some(error) = members.get("error") {
            let code = error
                .get("code")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    Error::decode_failed::<Self>(format!("error without a `code`: `{}`", error))
                })?
                .to_owned();
            return Ok(Self::Missing {
                code,
                details: error.clone(),
            });
        }
        if let Some(status) = members.get("status").and_then(Value::as_str) {
            let details = members.get("details").cloned().unwrap_or(Value::Null);
            if status == VERSION_FOUND {
                return decode_value(&details).map(Self::PastVersion);
            }
            return Ok(Self::PastVersionUnavailable {
                status: status.to_owned(),
                details,
            });
        }
        Err(Error::decode_failed::<Self>(format!(
            "expected one of `data`, `error` or `status`, found `{}`",
            json
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct ObjectReadArray(Vec<ObjectRead>);

impl Factory for ObjectReadArray {
    fn factory(json: &Value) -> Result<Self> {
        decode_each::<Self, _>(json, ObjectRead::factory).map(Self)
    }
}

/// One dynamic field of a parent object.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct DynamicFieldInfo {
    name: Value,
    #[serde(default)]
    bcs_name: Option<String>,
    #[serde(rename = "type")]
    type_: String,
    object_type: String,
    object_id: ObjectId,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    version: u64,
    digest: String,
}

/// A page of dynamic fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct DynamicFields {
    data: Vec<DynamicFieldInfo>,
    #[serde(default)]
    next_cursor: Option<ObjectId>,
    #[serde(default)]
    has_next_page: bool,
}

impl FromDict for DynamicFields {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn data() -> Value {
        json!({
            "objectId": "0x5",
            "version": "17",
            "digest": "8Xg2",
            "type": "0x3::sui_system::SuiSystemState",
            "storageRebate": "0"
        })
    }

    #[test]
    fn found() {
        let sut = ObjectRead::factory(&json!({ "data": data() })).unwrap();
        assert!(sut.is_found());
        let data = sut.data().unwrap();
        assert_eq!(data.object_id().as_str(), "0x5");
        assert_eq!(*data.version(), 17);
        assert_eq!(*data.storage_rebate(), Some(0));
        assert_eq!(data.content(), &None);
    }

    #[test]
    fn missing() {
        let sut = ObjectRead::factory(&json!({
            "error": {"code": "notExists", "object_id": "0x99"}
        }))
        .unwrap();
        assert_eq!(
            sut,
            ObjectRead::Missing {
                code: "notExists".to_owned(),
                details: json!({"code": "notExists", "object_id": "0x99"})
            }
        );
    }

    #[test]
    fn error_without_code_is_decode_failed() {
        for error in [json!({}), json!({"code": 7}), json!("notExists")] {
            let sut = ObjectRead::factory(&json!({ "error": error }));
            assert!(sut.unwrap_err().is_decode_failed());
        }
    }

    #[test]
    fn past_versions() {
        let found = ObjectRead::factory(&json!({"status": "VersionFound", "details": data()}));
        assert!(found.unwrap().is_past_version());
        let deleted = ObjectRead::factory(&json!({
            "status": "ObjectDeleted",
            "details": {"objectId": "0x5", "version": 3, "digest": "x"}
        }))
        .unwrap();
        assert!(deleted.is_past_version_unavailable());
        assert_eq!(deleted.data(), None);
    }

    #[test]
    fn unknown_shape_fails() {
        assert!(ObjectRead::factory(&json!({"foo": 1}))
            .unwrap_err()
            .is_decode_error());
        assert!(ObjectRead::factory(&json!("0x5"))
            .unwrap_err()
            .is_decode_error());
        assert!(ObjectRead::factory(&json!({"data": {"objectId": "0x5"}}))
            .unwrap_err()
            .is_decode_error());
    }

    #[test]
    fn read_array() {
        let sut = ObjectReadArray::factory(&json!([
            { "data": data() },
            { "error": {"code": "deleted"} }
        ]))
        .unwrap();
        assert_eq!(sut.len(), 2);
        assert!(sut[1].is_missing());
    }

    #[test]
    fn owned_objects() {
        let sut = ObjectInfoList::factory(&json!([{
            "objectId": "0x1f",
            "version": 2,
            "digest": "Dg",
            "type": "0x2::coin::Coin<0x2::sui::SUI>",
            "owner": {"AddressOwner": "0x7"},
            "previousTransaction": "Tx"
        }]))
        .unwrap();
        assert_eq!(sut[0].type_(), "0x2::coin::Coin<0x2::sui::SUI>");
    }

    #[test]
    fn dynamic_fields() {
        let sut = DynamicFields::from_dict(&json!({
            "data": [{
                "name": {"type": "u64", "value": "1"},
                "bcsName": "2",
                "type": "DynamicField",
                "objectType": "u64",
                "objectId": "0xd",
                "version": "4",
                "digest": "Dg"
            }],
            "nextCursor": null,
            "hasNextPage": false
        }))
        .unwrap();
        assert_eq!(sut.data().len(), 1);
        assert_eq!(sut.next_cursor(), &None);
    }
}
