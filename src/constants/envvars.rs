pub const TUYA_REGION: &str = "TUYA_REGION";
pub const TUYA_API_KEY: &str = "TUYA_API_KEY";
pub const TUYA_API_SECRET: &str = "TUYA_API_SECRET";
pub const TUYA_DEVICE_ID: &str = "TUYA_DEVICE_ID";

pub const MQTT_BROKER: &str = "MQTT_BROKER";
pub const MQTT_PORT: &str = "MQTT_PORT";

pub const MONGO_URI: &str = "MONGO_URI";
pub const MONGO_DB: &str = "MONGO_DB";
pub const MONGO_COLLECTION: &str = "MONGO_COLLECTION";

pub const WORKER_CMD: &str = "WORKER_CMD";

pub const LOG_LEVEL: &str = "LOG_LEVEL";
