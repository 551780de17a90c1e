use crate::api::code_area::CodeArea;
use crate::api::plus_code::PlusCode;
use geojson::{Feature, JsonObject, feature::Id};
use serde_json::Value;
use wkt::ToWkt;

/// Text format used when rendering a code's area as geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    #[default]
    Wkt,
    /// GeoJSON format
    GeoJson,
}

impl CodeArea {
    /// Renders the bounding box polygon in the requested text format.
    ///
    /// # Example
    /// ```
    /// use olc_rs::{GeometryFormat, decode};
    ///
    /// # fn main() -> Result<(), olc_rs::OlcError> {
    /// let area = decode("7FG49Q00+")?;
    /// let wkt = area.to_geometry_string(GeometryFormat::Wkt);
    /// assert!(wkt.starts_with("POLYGON"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_geometry_string(&self, format: GeometryFormat) -> String {
        let polygon = self.to_polygon();
        match format {
            GeometryFormat::Wkt => polygon.wkt_string(),
            GeometryFormat::GeoJson => geojson::Geometry::from(&polygon).to_string(),
        }
    }
}

impl PlusCode {
    /// GeoJSON feature for the code's area, with the code as feature id and
    /// `code` / `code_length` properties.
    pub fn to_geojson_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("code".to_string(), Value::from(self.code.clone()));
        properties.insert("code_length".to_string(), Value::from(self.code_length()));

        Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::from(&self.to_polygon())),
            id: Some(Id::String(self.code.clone())),
            properties: Some(properties),
            foreign_members: None,
        }
    }
}
