use jobschema_core::{
    ColumnSpec, DEFAULT_TABLE_PREFIX, Error, IndexSpec, SqlType, TableSpec, build,
    scheduler_tables,
};

fn job_and_trigger() -> Vec<TableSpec> {
    vec![
        TableSpec::new("JOB")
            .pk([ColumnSpec::string("id", 36)])
            .columns([ColumnSpec::string("name", 80)]),
        TableSpec::new("TRIGGER")
            .pk([ColumnSpec::string("id", 36)])
            .columns([ColumnSpec::string("jobId", 36)])
            .fk("JOB")
            .index(IndexSpec::new("idx_trigger_job", ["jobId"])),
    ]
}

#[test]
fn builds_job_and_trigger_with_prefix() {
    let graph = build(&job_and_trigger(), "QRTZ_").expect("build graph");

    let names: Vec<&str> = graph.iter().map(|table| table.name.as_str()).collect();
    assert_eq!(names, vec!["QRTZ_JOB", "QRTZ_TRIGGER"]);

    let job = graph.get("QRTZ_JOB").expect("job table");
    assert_eq!(job.primary_key.columns, vec!["id"]);
    assert!(job.foreign_key.is_none());
    assert_eq!(
        job.column("name").map(|column| column.sql_type),
        Some(SqlType::Varchar { length: 80 })
    );

    let trigger = graph.get("QRTZ_TRIGGER").expect("trigger table");
    assert_eq!(trigger.primary_key.columns, vec!["id"]);
    let fk = trigger.foreign_key.as_ref().expect("trigger fk");
    assert_eq!(fk.referenced_table, "QRTZ_JOB");
    assert_eq!(fk.referenced_columns, vec!["id"]);
    assert_eq!(fk.columns, job.primary_key.columns);
    assert_eq!(trigger.indexes.len(), 1);
    assert_eq!(trigger.indexes[0].name, "idx_trigger_job");
    assert_eq!(trigger.indexes[0].columns, vec!["jobId"]);
}

#[test]
fn missing_fk_target_is_unresolved() {
    let specs = vec![
        TableSpec::new("ORPHAN")
            .pk([ColumnSpec::string("id", 36)])
            .fk("MISSING"),
    ];
    let err = build(&specs, "QRTZ_").unwrap_err();
    assert_eq!(
        err,
        Error::UnresolvedReference {
            table: "QRTZ_ORPHAN".to_string(),
            target: "QRTZ_MISSING".to_string(),
        }
    );
    assert!(err.to_string().contains("QRTZ_MISSING"));
}

#[test]
fn index_on_missing_column_is_unresolved() {
    let specs = vec![
        TableSpec::new("JOB")
            .pk([ColumnSpec::string("id", 36)])
            .index(IndexSpec::new("idx_job_nope", ["nope"])),
    ];
    let err = build(&specs, "").unwrap_err();
    assert!(matches!(
        err,
        Error::UnresolvedColumn { ref table, ref index, ref column }
            if table == "JOB" && index == "idx_job_nope" && column == "nope"
    ));
}

#[test]
fn scheduler_catalog_builds() {
    let specs = scheduler_tables();
    let graph = build(&specs, DEFAULT_TABLE_PREFIX).expect("build scheduler tables");
    assert_eq!(graph.len(), specs.len());

    for (position, table) in graph.iter().enumerate() {
        assert!(table.name.starts_with(DEFAULT_TABLE_PREFIX));
        if let Some(fk) = &table.foreign_key {
            let parent = graph
                .iter()
                .position(|candidate| candidate.name == fk.referenced_table)
                .expect("fk target present");
            assert!(parent < position, "{} references a later table", table.name);
        }
        for index in &table.indexes {
            assert!(!index.columns.is_empty());
        }
    }

    let triggers = graph.get("QRTZ_TRIGGERS").expect("triggers");
    assert_eq!(
        triggers.primary_key.columns,
        vec!["SCHED_NAME", "TRIGGER_NAME", "TRIGGER_GROUP"]
    );
    assert_eq!(
        triggers.foreign_key.as_ref().map(|fk| fk.columns.clone()),
        Some(vec![
            "SCHED_NAME".to_string(),
            "JOB_NAME".to_string(),
            "JOB_GROUP".to_string(),
        ])
    );
}

#[test]
fn graph_serializes_in_declaration_order() {
    let graph = build(&job_and_trigger(), "QRTZ_").expect("build graph");
    let json = serde_json::to_value(&graph).expect("serialize graph");
    let tables = json["tables"].as_array().expect("tables array");
    assert_eq!(tables[0]["name"], "QRTZ_JOB");
    assert_eq!(tables[1]["foreign_key"]["referenced_table"], "QRTZ_JOB");
    assert_eq!(tables[0]["columns"][0]["sql_type"]["kind"], "varchar");
}

#[test]
fn descriptors_deserialize_from_json() {
    let spec: TableSpec = serde_json::from_str(
        r#"{
  "name": "LOCKS",
  "pk": [{ "name": "LOCK_NAME", "type": "STRING", "nullable": false, "length": 40 }],
  "columns": [{ "name": "HELD", "type": "BIGINT", "nullable": true }]
}"#,
    )
    .expect("parse table spec");
    assert_eq!(spec.pk[0].length, Some(40));
    assert!(spec.fk.is_none());
    assert!(spec.indexes.is_empty());
}
