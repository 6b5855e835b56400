//! Job-store tables required by the scheduler, in dependency order.

use crate::descriptor::{ColumnSpec, IndexSpec, TableSpec};
use crate::types::ColumnType;

/// Prefix applied to every scheduler table unless configured otherwise.
pub const DEFAULT_TABLE_PREFIX: &str = "QRTZ_";

const SCHED_NAME_LEN: u32 = 120;
const NAME_LEN: u32 = 200;

fn sched_name() -> ColumnSpec {
    ColumnSpec::string("SCHED_NAME", SCHED_NAME_LEN)
}

fn name(column: &str) -> ColumnSpec {
    ColumnSpec::string(column, NAME_LEN)
}

fn trigger_key() -> [ColumnSpec; 3] {
    [sched_name(), name("TRIGGER_NAME"), name("TRIGGER_GROUP")]
}

fn bigint(column: &str) -> ColumnSpec {
    ColumnSpec::new(column, ColumnType::BigInt)
}

fn integer(column: &str) -> ColumnSpec {
    ColumnSpec::new(column, ColumnType::Integer)
}

fn boolean(column: &str) -> ColumnSpec {
    ColumnSpec::new(column, ColumnType::Boolean)
}

fn blob(column: &str) -> ColumnSpec {
    ColumnSpec::new(column, ColumnType::Blob)
}

/// The full table set, parents before children.
pub fn scheduler_tables() -> Vec<TableSpec> {
    vec![
        TableSpec::new("JOB_DETAILS")
            .pk([sched_name(), name("JOB_NAME"), name("JOB_GROUP")])
            .columns([
                ColumnSpec::string("DESCRIPTION", 250).nullable(),
                ColumnSpec::string("JOB_CLASS_NAME", 250),
                boolean("IS_DURABLE"),
                boolean("IS_NONCONCURRENT"),
                boolean("IS_UPDATE_DATA"),
                boolean("REQUESTS_RECOVERY"),
                blob("JOB_DATA").nullable(),
            ])
            .index(IndexSpec::new(
                "IDX_QRTZ_J_REQ_RECOVERY",
                ["SCHED_NAME", "REQUESTS_RECOVERY"],
            ))
            .index(IndexSpec::new("IDX_QRTZ_J_GRP", ["SCHED_NAME", "JOB_GROUP"])),
        TableSpec::new("TRIGGERS")
            .pk(trigger_key())
            .columns([
                name("JOB_NAME"),
                name("JOB_GROUP"),
                ColumnSpec::string("DESCRIPTION", 250).nullable(),
                bigint("NEXT_FIRE_TIME").nullable(),
                bigint("PREV_FIRE_TIME").nullable(),
                integer("PRIORITY").nullable(),
                ColumnSpec::string("TRIGGER_STATE", 16),
                ColumnSpec::string("TRIGGER_TYPE", 8),
                bigint("START_TIME"),
                bigint("END_TIME").nullable(),
                name("CALENDAR_NAME").nullable(),
                ColumnSpec::new("MISFIRE_INSTR", ColumnType::SmallInt).nullable(),
                blob("JOB_DATA").nullable(),
            ])
            .fk("JOB_DETAILS")
            .index(IndexSpec::new(
                "IDX_QRTZ_T_J",
                ["SCHED_NAME", "JOB_NAME", "JOB_GROUP"],
            ))
            .index(IndexSpec::new("IDX_QRTZ_T_JG", ["SCHED_NAME", "JOB_GROUP"]))
            .index(IndexSpec::new("IDX_QRTZ_T_C", ["SCHED_NAME", "CALENDAR_NAME"]))
            .index(IndexSpec::new("IDX_QRTZ_T_G", ["SCHED_NAME", "TRIGGER_GROUP"]))
            .index(IndexSpec::new(
                "IDX_QRTZ_T_STATE",
                ["SCHED_NAME", "TRIGGER_STATE"],
            ))
            .index(IndexSpec::new(
                "IDX_QRTZ_T_N_STATE",
                ["SCHED_NAME", "TRIGGER_NAME", "TRIGGER_GROUP", "TRIGGER_STATE"],
            ))
            .index(IndexSpec::new(
                "IDX_QRTZ_T_N_G_STATE",
                ["SCHED_NAME", "TRIGGER_GROUP", "TRIGGER_STATE"],
            ))
            .index(IndexSpec::new(
                "IDX_QRTZ_T_NEXT_FIRE_TIME",
                ["SCHED_NAME", "NEXT_FIRE_TIME"],
            ))
            .index(IndexSpec::new(
                "IDX_QRTZ_T_NFT_ST",
                ["SCHED_NAME", "TRIGGER_STATE", "NEXT_FIRE_TIME"],
            ))
            .index(IndexSpec::new(
                "IDX_QRTZ_T_NFT_MISFIRE",
                ["SCHED_NAME", "MISFIRE_INSTR", "NEXT_FIRE_TIME"],
            ))
            .index(IndexSpec::new(
                "IDX_QRTZ_T_NFT_ST_MISFIRE",
                ["SCHED_NAME", "MISFIRE_INSTR", "NEXT_FIRE_TIME", "TRIGGER_STATE"],
            ))
            .index(IndexSpec::new(
                "IDX_QRTZ_T_NFT_ST_MISFIRE_GRP",
                [
                    "SCHED_NAME",
                    "MISFIRE_INSTR",
                    "NEXT_FIRE_TIME",
                    "TRIGGER_GROUP",
                    "TRIGGER_STATE",
                ],
            )),
        TableSpec::new("SIMPLE_TRIGGERS")
            .pk(trigger_key())
            .columns([
                bigint("REPEAT_COUNT"),
                bigint("REPEAT_INTERVAL"),
                bigint("TIMES_TRIGGERED"),
            ])
            .fk("TRIGGERS"),
        TableSpec::new("CRON_TRIGGERS")
            .pk(trigger_key())
            .columns([
                ColumnSpec::string("CRON_EXPRESSION", 120),
                ColumnSpec::string("TIME_ZONE_ID", 80).nullable(),
            ])
            .fk("TRIGGERS"),
        TableSpec::new("SIMPROP_TRIGGERS")
            .pk(trigger_key())
            .columns([
                ColumnSpec::string("STR_PROP_1", 512).nullable(),
                ColumnSpec::string("STR_PROP_2", 512).nullable(),
                ColumnSpec::string("STR_PROP_3", 512).nullable(),
                integer("INT_PROP_1").nullable(),
                integer("INT_PROP_2").nullable(),
                bigint("LONG_PROP_1").nullable(),
                bigint("LONG_PROP_2").nullable(),
                ColumnSpec::decimal("DEC_PROP_1", 13, 4).nullable(),
                ColumnSpec::decimal("DEC_PROP_2", 13, 4).nullable(),
                boolean("BOOL_PROP_1").nullable(),
                boolean("BOOL_PROP_2").nullable(),
            ])
            .fk("TRIGGERS"),
        TableSpec::new("BLOB_TRIGGERS")
            .pk(trigger_key())
            .columns([blob("BLOB_DATA").nullable()])
            .fk("TRIGGERS"),
        TableSpec::new("CALENDARS")
            .pk([sched_name(), name("CALENDAR_NAME")])
            .columns([blob("CALENDAR")]),
        TableSpec::new("PAUSED_TRIGGER_GRPS").pk([sched_name(), name("TRIGGER_GROUP")]),
        TableSpec::new("FIRED_TRIGGERS")
            .pk([sched_name(), ColumnSpec::string("ENTRY_ID", 95)])
            .columns([
                name("TRIGGER_NAME"),
                name("TRIGGER_GROUP"),
                name("INSTANCE_NAME"),
                bigint("FIRED_TIME"),
                bigint("SCHED_TIME"),
                integer("PRIORITY"),
                ColumnSpec::string("STATE", 16),
                name("JOB_NAME").nullable(),
                name("JOB_GROUP").nullable(),
                boolean("IS_NONCONCURRENT").nullable(),
                boolean("REQUESTS_RECOVERY").nullable(),
            ])
            .index(IndexSpec::new(
                "IDX_QRTZ_FT_TRIG_INST_NAME",
                ["SCHED_NAME", "INSTANCE_NAME"],
            ))
            .index(IndexSpec::new(
                "IDX_QRTZ_FT_INST_JOB_REQ_RCVRY",
                ["SCHED_NAME", "INSTANCE_NAME", "REQUESTS_RECOVERY"],
            ))
            .index(IndexSpec::new(
                "IDX_QRTZ_FT_J_G",
                ["SCHED_NAME", "JOB_NAME", "JOB_GROUP"],
            ))
            .index(IndexSpec::new("IDX_QRTZ_FT_JG", ["SCHED_NAME", "JOB_GROUP"]))
            .index(IndexSpec::new(
                "IDX_QRTZ_FT_T_G",
                ["SCHED_NAME", "TRIGGER_NAME", "TRIGGER_GROUP"],
            ))
            .index(IndexSpec::new("IDX_QRTZ_FT_TG", ["SCHED_NAME", "TRIGGER_GROUP"])),
        TableSpec::new("SCHEDULER_STATE")
            .pk([sched_name(), name("INSTANCE_NAME")])
            .columns([bigint("LAST_CHECKIN_TIME"), bigint("CHECKIN_INTERVAL")]),
        TableSpec::new("LOCKS").pk([sched_name(), ColumnSpec::string("LOCK_NAME", 40)]),
    ]
}
