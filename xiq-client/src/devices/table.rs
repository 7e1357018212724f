use crate::server::DeviceRecord;
use crate::util::format::truncate_str;

const WIDTH_ID: usize = 16;
const WIDTH_NAME: usize = 24;
const WIDTH_ROLE: usize = 8;
const WIDTH_IP: usize = 16;

pub fn format_devices_table(devices: &[DeviceRecord]) -> String {
    if devices.is_empty() {
        return "No devices found".to_string();
    }

    let mut lines = Vec::with_capacity(devices.len() + 1);
    lines.push(format!(
        "{:<WIDTH_ID$} {:<WIDTH_NAME$} {:<WIDTH_ROLE$} {:<WIDTH_IP$} {}",
        "DEVICE ID", "HOSTNAME", "ROLE", "IP", "VERSION",
    ));

    for dev in devices {
        let name = truncate_str(&dev.hostname, WIDTH_NAME - 1);
        let role = if dev.device_function.is_empty() {
            "-"
        } else {
            dev.device_function.as_str()
        };
        let ip = if dev.ip_address.is_empty() {
            "-"
        } else {
            dev.ip_address.as_str()
        };

        lines.push(format!(
            "{:<WIDTH_ID$} {:<WIDTH_NAME$} {:<WIDTH_ROLE$} {:<WIDTH_IP$} {}",
            dev.id, name, role, ip, dev.software_version,
        ));
    }

    lines.join("\n")
}

pub fn print_devices_table(devices: &[DeviceRecord]) {
    println!("{}", format_devices_table(devices));
}
