/// Conversion hook and interceptor tests
///
/// Simulates a small data-access layer that produces nullable rows and hands
/// them to the converter, with call-site messages applied by the interceptor.
/// Run with: cargo test --test conversion_tests
use getorthrow::{
    ExceptionFactory, GetOrThrow, GetOrThrowConfig, GetOrThrowConverter, GetOrThrowError,
    IntoGetOrThrow, MessageInterceptor,
};
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
enum ServiceError {
    NotFound(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::NotFound(message) => write!(f, "404: {}", message),
        }
    }
}

impl std::error::Error for ServiceError {}

struct OrderStore {
    rows: BTreeMap<u32, String>,
    converter: GetOrThrowConverter<ServiceError>,
    interceptor: MessageInterceptor,
}

impl OrderStore {
    fn new() -> Self {
        Self::with_config(&GetOrThrowConfig::new().default_message("Order not found"))
            .unwrap()
    }

    fn with_config(config: &GetOrThrowConfig) -> getorthrow::Result<Self> {
        let factory: Arc<dyn ExceptionFactory<ServiceError>> =
            Arc::new(|message: &str| ServiceError::NotFound(message.to_string()));

        let mut rows = BTreeMap::new();
        rows.insert(1, "keyboard".to_string());
        rows.insert(2, "mouse".to_string());

        Ok(Self {
            rows,
            converter: GetOrThrowConverter::with_factory_config(config, factory)?,
            interceptor: MessageInterceptor::new()
                .with_template("find_order", "Order {} not found for {}"),
        })
    }

    // Nullable row lookup as a query layer would report it
    fn query_row(&self, id: u32) -> Option<Box<dyn Any + Send>> {
        self.rows
            .get(&id)
            .map(|row| Box::new(row.clone()) as Box<dyn Any + Send>)
    }

    fn find_order(&self, id: u32, customer: &str) -> GetOrThrow<String, ServiceError> {
        self.interceptor.around("find_order", &[&id as &dyn Display, &customer], || {
            self.rows.get(&id).cloned().get_or_throw_with(&self.converter)
        })
    }

    fn find_unannotated(&self, id: u32) -> GetOrThrow<String, ServiceError> {
        self.interceptor
            .around("find_unannotated", &[&id], || self.converter.convert(self.rows.get(&id).cloned()))
    }
}

#[test]
fn test_converted_present_row() {
    let store = OrderStore::new();
    assert_eq!(store.find_order(1, "ann").or_throw(), Ok("keyboard".to_string()));
}

#[test]
fn test_interceptor_message_wins_over_config_default() {
    let store = OrderStore::new();
    let err = store.find_order(9, "ann").or_throw().unwrap_err();
    assert_eq!(err, ServiceError::NotFound("Order 9 not found for ann".to_string()));
    assert_eq!(err.to_string(), "404: Order 9 not found for ann");
}

#[test]
fn test_config_default_message_without_template() {
    let store = OrderStore::new();
    let err = store.find_unannotated(9).or_throw().unwrap_err();
    assert_eq!(err, ServiceError::NotFound("Order not found".to_string()));
}

#[test]
fn test_type_erased_rows() {
    let store = OrderStore::new();

    let row = store
        .converter
        .convert_any::<String>(store.query_row(2))
        .unwrap();
    assert_eq!(row.or_throw(), Ok("mouse".to_string()));

    let missing = store
        .converter
        .convert_any::<String>(store.query_row(3))
        .unwrap();
    assert!(missing.is_empty());

    let wrong_type = store.converter.convert_any::<u64>(store.query_row(1));
    assert!(matches!(wrong_type, Err(GetOrThrowError::TypeMismatch(_))));
}

#[test]
fn test_converter_from_json_config() {
    let config = GetOrThrowConfig::from_json(
        r#"{"default_message": "Запись не найдена", "warn_on_default_factory": false}"#,
    )
    .unwrap();
    let converter = GetOrThrowConverter::from_config(&config).unwrap();

    let err = converter.convert::<i32>(None).or_throw().unwrap_err();
    assert_eq!(err, GetOrThrowError::NotFound("Запись не найдена".to_string()));
}

#[test]
fn test_store_rejects_empty_default_message() {
    let config = GetOrThrowConfig::from_json(r#"{"default_message": ""}"#).unwrap_err();
    assert!(matches!(config, GetOrThrowError::InvalidArgument(_)));

    let result = OrderStore::with_config(&GetOrThrowConfig::new().default_message(""));
    assert!(matches!(result, Err(GetOrThrowError::InvalidArgument(_))));
}

#[test]
fn test_converter_is_shareable() {
    let store = Arc::new(OrderStore::new());

    let handles: Vec<_> = (1..=3)
        .map(|id| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.find_order(id, "bot").is_present())
        })
        .collect();

    let found: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(found, vec![true, true, false]);
}
