//! REST request shaping for a `ListResource`

use serde_json::Value;
use std::collections::BTreeMap;

use super::resource::{HotelScope, ListResource, UpdateRoute};
use crate::shared::session::SessionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

/// Parameters of a list request.
///
/// `extra` is passed through as query parameters; nothing sets it today, it exists so
/// server-side filtering or paging can be added without touching the controller API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchParams {
    pub hotel_id: Option<String>,
    pub extra: BTreeMap<String, String>,
}

/// Transport-independent description of one HTTP call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: HttpMethod, path: String, session: &SessionContext) -> Self {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if let Some(token) = &session.access_token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        Self {
            method,
            path,
            query: Vec::new(),
            headers,
            body: None,
        }
    }

    /// `GET {path}` narrowed to the hotel in `params`
    pub fn list<R: ListResource>(params: &FetchParams, session: &SessionContext) -> Self {
        let mut request = Self::new(HttpMethod::Get, R::RESOURCE_PATH.to_string(), session);
        if let Some(hotel_id) = &params.hotel_id {
            match R::hotel_scope() {
                HotelScope::None => {}
                HotelScope::QueryParam(name) => request.query.push((name.to_string(), hotel_id.clone())),
                HotelScope::Header(name) => request.headers.push((name.to_string(), hotel_id.clone())),
            }
        }
        request
            .query
            .extend(params.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        request
    }

    /// `POST {path}`
    pub fn create<R: ListResource>(payload: Value, session: &SessionContext) -> Self {
        let mut request = Self::new(HttpMethod::Post, R::RESOURCE_PATH.to_string(), session);
        request.body = Some(payload);
        request
    }

    /// Update call according to `R::update_route()`.
    ///
    /// `key` is the identity of the edited row: its id, or for `PutByField` the business
    /// key the row had before editing.
    pub fn update<R: ListResource>(key: &str, payload: Value, session: &SessionContext) -> Result<Self, String> {
        let mut request = match R::update_route() {
            UpdateRoute::PutById => {
                Self::new(HttpMethod::Put, item_path(R::RESOURCE_PATH, key), session)
            }
            UpdateRoute::PostWithFlag(flag) => {
                let mut request = Self::new(HttpMethod::Post, R::RESOURCE_PATH.to_string(), session);
                request.query.push((flag.to_string(), "true".to_string()));
                request
            }
            UpdateRoute::PutByField(field) => {
                if key.trim().is_empty() {
                    return Err(format!("Cannot update {}: field '{}' is empty", R::TITLE, field));
                }
                Self::new(HttpMethod::Put, item_path(R::RESOURCE_PATH, key), session)
            }
        };
        request.body = Some(payload);
        Ok(request)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Absolute URL with percent-encoded query
    pub fn url(&self, base: &str) -> String {
        let mut url = format!("{}{}", base.trim_end_matches('/'), self.path);
        if !self.query.is_empty() {
            let query: Vec<String> = self
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&query.join("&"));
        }
        url
    }
}

fn item_path(collection: &str, key: &str) -> String {
    format!("{}/{}", collection.trim_end_matches('/'), urlencoding::encode(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_resource::testing::{session, CodedRoomType, FlaggedRoomType, RoomType};
    use serde_json::json;

    fn params(hotel: Option<&str>) -> FetchParams {
        FetchParams {
            hotel_id: hotel.map(str::to_string),
            ..FetchParams::default()
        }
    }

    #[test]
    fn list_is_scoped_by_query_param_and_carries_bearer_token() {
        let request = ApiRequest::list::<RoomType>(&params(Some("H 1")), &session());
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url("http://pms.local:3000/"), "http://pms.local:3000/api/RoomType?hotelId=H%201");
        assert_eq!(request.header("authorization"), Some("Bearer tok"));
        assert_eq!(request.body, None);
    }

    #[test]
    fn list_without_token_or_hotel_is_plain() {
        let request = ApiRequest::list::<RoomType>(&params(None), &SessionContext::default());
        assert_eq!(request.url("http://pms"), "http://pms/api/RoomType");
        assert_eq!(request.header("Authorization"), None);
    }

    #[test]
    fn header_scope_and_extra_params() {
        let mut p = params(Some("H9"));
        p.extra.insert("status".into(), "active".into());
        let request = ApiRequest::list::<CodedRoomType>(&p, &session());
        assert_eq!(request.header("X-Hotel-Id"), Some("H9"));
        assert_eq!(request.url(""), "/api/CodedRoomType/?status=active");

        let request = ApiRequest::list::<FlaggedRoomType>(&params(Some("H9")), &session());
        assert_eq!(request.url(""), "/api/FlaggedRoomType");
    }

    #[test]
    fn update_by_id() {
        let request = ApiRequest::update::<RoomType>("42", json!({"id": 42}), &session()).unwrap();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.url(""), "/api/RoomType/42");
        assert_eq!(request.body, Some(json!({"id": 42})));
    }

    #[test]
    fn update_by_business_code() {
        let request =
            ApiRequest::update::<CodedRoomType>("DLX/1", json!({"id": 7, "roomCode": "DLX/2"}), &session()).unwrap();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.url(""), "/api/CodedRoomType/DLX%2F1");
        assert_eq!(request.body, Some(json!({"id": 7, "roomCode": "DLX/2"})));

        let err = ApiRequest::update::<CodedRoomType>(" ", json!({"roomCode": "STD"}), &session()).unwrap_err();
        assert!(err.contains("roomCode"));
    }

    #[test]
    fn update_through_create_endpoint_with_flag() {
        let request = ApiRequest::update::<FlaggedRoomType>("3", json!({"id": 3}), &session()).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url(""), "/api/FlaggedRoomType?isUpdate=true");
    }

    #[test]
    fn create_posts_to_collection() {
        let request = ApiRequest::create::<RoomType>(json!({"roomCode": "STD"}), &session());
        assert_eq!(request.method.as_str(), "POST");
        assert_eq!(request.url(""), "/api/RoomType");
    }
}
