//! MatrixOptions record and its nested records

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, record as record_error};

/// `null` decodes like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Nested records whose fields are only known from the payload itself.
/// Each wraps the raw object and reads fields on demand.
macro_rules! opaque_record {
    ($($name:ident),+ $(,)?) => {$(
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Map<String, Value>);

        impl $name {
            pub fn new(fields: Map<String, Value>) -> Self {
                Self(fields)
            }

            /// Field `key` decoded as `T`, or `None` when absent or of another type
            pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
                self.0
                    .get(key)
                    .and_then(|value| T::deserialize(value).ok())
            }

            pub fn fields(&self) -> &Map<String, Value> {
                &self.0
            }
        }
    )+};
}

opaque_record!(Autoship, Images, Tabs, OldPrice, Price, PricingDetail, ProductOptions);

/// Purchase options of a product. Read-only once decoded.
///
/// Missing and `null` fields take their defaults. A present value of the
/// wrong type (a string `productId`, an object for `images`) is an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatrixOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    autoship: Option<Autoship>,
    #[serde(deserialize_with = "null_as_default")]
    has_hsn_size_chart: bool,
    #[serde(deserialize_with = "null_as_default")]
    images: Vec<Images>,
    #[serde(deserialize_with = "null_as_default")]
    tabs: Vec<Tabs>,
    #[serde(deserialize_with = "null_as_default")]
    product_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    autoship_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    item_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    json_product_zoom_urls: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    option_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_image_url_with_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_price: Option<OldPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pricing_detail: Option<PricingDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_options: Option<ProductOptions>,
}

const RECORD: &str = "MatrixOptions";

impl MatrixOptions {
    /// Decode from a payload object
    pub fn from_dictionary(dictionary: Map<String, Value>) -> Result<Self> {
        serde_json::from_value(Value::Object(dictionary))
            .map_err(|e| record_error::decode_failed(RECORD, e))
    }

    /// Decode from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| record_error::decode_failed(RECORD, e))
    }

    pub fn autoship(&self) -> Option<&Autoship> {
        self.autoship.as_ref()
    }

    pub fn has_hsn_size_chart(&self) -> bool {
        self.has_hsn_size_chart
    }

    pub fn images(&self) -> &[Images] {
        &self.images
    }

    pub fn tabs(&self) -> &[Tabs] {
        &self.tabs
    }

    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    pub fn autoship_information(&self) -> Option<&str> {
        self.autoship_information.as_deref()
    }

    pub fn item_number(&self) -> Option<&str> {
        self.item_number.as_deref()
    }

    pub fn json_product_zoom_urls(&self) -> Option<&str> {
        self.json_product_zoom_urls.as_deref()
    }

    pub fn option_description(&self) -> Option<&str> {
        self.option_description.as_deref()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    pub fn product_description(&self) -> Option<&str> {
        self.product_description.as_deref()
    }

    pub fn product_image_url(&self) -> Option<&str> {
        self.product_image_url.as_deref()
    }

    pub fn product_image_url_with_token(&self) -> Option<&str> {
        self.product_image_url_with_token.as_deref()
    }

    pub fn product_url(&self) -> Option<&str> {
        self.product_url.as_deref()
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }

    pub fn old_price(&self) -> Option<&OldPrice> {
        self.old_price.as_ref()
    }

    pub fn price(&self) -> Option<&Price> {
        self.price.as_ref()
    }

    pub fn pricing_detail(&self) -> Option<&PricingDetail> {
        self.pricing_detail.as_ref()
    }

    pub fn product_options(&self) -> Option<&ProductOptions> {
        self.product_options.as_ref()
    }
}
