pub const TUYA_REGION: &str = "sg";
pub const TUYA_DEVICE_ID: &str = "a316b14c8d5efb6070abkd";

pub const MQTT_BROKER: &str = "localhost";
pub const MQTT_PORT: &str = "1883";

pub const MONGO_DB: &str = "smart_office";
pub const MONGO_COLLECTION: &str = "device_raw_data";

pub const WORKER_CMD: &str = "tuya-cloud-mqtt-bridge";

pub const LOG_LEVEL: &str = "info";
