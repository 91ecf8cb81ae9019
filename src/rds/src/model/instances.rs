// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Database instances, their automated backups, log files, and the engine
//! versions and instance classes available to them.

use super::*;

message! {
    /// A database instance.
    pub struct DbInstance {
        /// The user-supplied identifier. It is unique within the account and
        /// region.
        "DBInstanceIdentifier" => db_instance_identifier: opt String,
        /// The compute and memory capacity, e.g. `db.m5.large`.
        "DBInstanceClass" => db_instance_class: opt String,
        "Engine" => engine: opt String,
        /// The current state, e.g. `available` or `modifying`.
        "DBInstanceStatus" => db_instance_status: opt String,
        "MasterUsername" => master_username: opt String,
        "DBName" => db_name: opt String,
        "Endpoint" => endpoint: opt Endpoint,
        /// The allocated storage in gibibytes.
        "AllocatedStorage" => allocated_storage: opt i32,
        "InstanceCreateTime" => instance_create_time: opt Timestamp,
        "PreferredBackupWindow" => preferred_backup_window: opt String,
        "BackupRetentionPeriod" => backup_retention_period: opt i32,
        "DBSecurityGroups" => db_security_groups: list DbSecurityGroupMembership,
        "VpcSecurityGroups" => vpc_security_groups: list VpcSecurityGroupMembership,
        "DBParameterGroups" => db_parameter_groups: list DbParameterGroupStatus,
        "AvailabilityZone" => availability_zone: opt String,
        "DBSubnetGroup" => db_subnet_group: opt DbSubnetGroup,
        "PreferredMaintenanceWindow" => preferred_maintenance_window: opt String,
        /// Changes that are applied during the next maintenance window.
        "PendingModifiedValues" => pending_modified_values: opt PendingModifiedValues,
        "LatestRestorableTime" => latest_restorable_time: opt Timestamp,
        "MultiAZ" => multi_az: opt bool,
        "EngineVersion" => engine_version: opt String,
        "AutoMinorVersionUpgrade" => auto_minor_version_upgrade: opt bool,
        "ReadReplicaSourceDBInstanceIdentifier" => read_replica_source_db_instance_identifier: opt String,
        "ReadReplicaDBInstanceIdentifiers" => read_replica_db_instance_identifiers: list String,
        "ReadReplicaDBClusterIdentifiers" => read_replica_db_cluster_identifiers: list String,
        "LicenseModel" => license_model: opt String,
        "Iops" => iops: opt i32,
        "OptionGroupMemberships" => option_group_memberships: list OptionGroupMembership,
        "CharacterSetName" => character_set_name: opt String,
        "SecondaryAvailabilityZone" => secondary_availability_zone: opt String,
        "PubliclyAccessible" => publicly_accessible: opt bool,
        "StatusInfos" => status_infos: list DbInstanceStatusInfo,
        "StorageType" => storage_type: opt String,
        "TdeCredentialArn" => tde_credential_arn: opt String,
        "DbInstancePort" => db_instance_port: opt i32,
        /// The cluster this instance is a member of, if any.
        "DBClusterIdentifier" => db_cluster_identifier: opt String,
        "StorageEncrypted" => storage_encrypted: opt bool,
        "KmsKeyId" => kms_key_id: opt String,
        /// The region-unique, immutable identifier of the instance.
        "DbiResourceId" => dbi_resource_id: opt String,
        "CACertificateIdentifier" => ca_certificate_identifier: opt String,
        "DomainMemberships" => domain_memberships: list DomainMembership,
        "CopyTagsToSnapshot" => copy_tags_to_snapshot: opt bool,
        "MonitoringInterval" => monitoring_interval: opt i32,
        "EnhancedMonitoringResourceArn" => enhanced_monitoring_resource_arn: opt String,
        "MonitoringRoleArn" => monitoring_role_arn: opt String,
        "PromotionTier" => promotion_tier: opt i32,
        "DBInstanceArn" => db_instance_arn: opt String,
        "Timezone" => timezone: opt String,
        "IAMDatabaseAuthenticationEnabled" => iam_database_authentication_enabled: opt bool,
        "PerformanceInsightsEnabled" => performance_insights_enabled: opt bool,
        "PerformanceInsightsKMSKeyId" => performance_insights_kms_key_id: opt String,
        "PerformanceInsightsRetentionPeriod" => performance_insights_retention_period: opt i32,
        "EnabledCloudwatchLogsExports" => enabled_cloudwatch_logs_exports: list String,
        "ProcessorFeatures" => processor_features: list ProcessorFeature,
        "DeletionProtection" => deletion_protection: opt bool,
        "AssociatedRoles" => associated_roles: list DbInstanceRole,
        "ListenerEndpoint" => listener_endpoint: opt Endpoint,
        "MaxAllocatedStorage" => max_allocated_storage: opt i32,
    }
}

message! {
    /// Changes to a database instance that are pending.
    pub struct PendingModifiedValues {
        "DBInstanceClass" => db_instance_class: opt String,
        "AllocatedStorage" => allocated_storage: opt i32,
        "MasterUserPassword" => master_user_password: secret String,
        "Port" => port: opt i32,
        "BackupRetentionPeriod" => backup_retention_period: opt i32,
        "MultiAZ" => multi_az: opt bool,
        "EngineVersion" => engine_version: opt String,
        "LicenseModel" => license_model: opt String,
        "Iops" => iops: opt i32,
        "DBInstanceIdentifier" => db_instance_identifier: opt String,
        "StorageType" => storage_type: opt String,
        "CACertificateIdentifier" => ca_certificate_identifier: opt String,
        "DBSubnetGroupName" => db_subnet_group_name: opt String,
        "PendingCloudwatchLogsExports" => pending_cloudwatch_logs_exports: opt PendingCloudwatchLogsExports,
        "ProcessorFeatures" => processor_features: list ProcessorFeature,
    }
}

message! {
    /// The status of a DB parameter group associated with an instance.
    pub struct DbParameterGroupStatus {
        "DBParameterGroupName" => db_parameter_group_name: opt String,
        "ParameterApplyStatus" => parameter_apply_status: opt String,
    }
}

message! {
    pub struct OptionGroupMembership {
        "OptionGroupName" => option_group_name: opt String,
        "Status" => status: opt String,
    }
}

message! {
    /// Status information about a read replica.
    pub struct DbInstanceStatusInfo {
        "StatusType" => status_type: opt String,
        /// `true` if the instance is operating normally.
        "Normal" => normal: opt bool,
        "Status" => status: opt String,
        "Message" => message: opt String,
    }
}

message! {
    /// An IAM role associated with a database instance.
    pub struct DbInstanceRole {
        "RoleArn" => role_arn: opt String,
        "FeatureName" => feature_name: opt String,
        "Status" => status: opt String,
    }
}

message! {
    #[builder(CreateDbInstance)]
    pub struct CreateDbInstanceRequest {
        "DBName" => db_name: opt String,
        "DBInstanceIdentifier" => db_instance_identifier: req String,
        "AllocatedStorage" => allocated_storage: opt i32,
        "DBInstanceClass" => db_instance_class: req String,
        "Engine" => engine: req String,
        "MasterUsername" => master_username: opt String,
        "MasterUserPassword" => master_user_password: secret String,
        "DBSecurityGroups" => db_security_groups: list String,
        "VpcSecurityGroupIds" => vpc_security_group_ids: list String,
        "AvailabilityZone" => availability_zone: opt String,
        "DBSubnetGroupName" => db_subnet_group_name: opt String,
        "PreferredMaintenanceWindow" => preferred_maintenance_window: opt String,
        "DBParameterGroupName" => db_parameter_group_name: opt String,
        "BackupRetentionPeriod" => backup_retention_period: opt i32,
        "PreferredBackupWindow" => preferred_backup_window: opt String,
        "Port" => port: opt i32,
        "MultiAZ" => multi_az: opt bool,
        "EngineVersion" => engine_version: opt String,
        "AutoMinorVersionUpgrade" => auto_minor_version_upgrade: opt bool,
        "LicenseModel" => license_model: opt String,
        "Iops" => iops: opt i32,
        "OptionGroupName" => option_group_name: opt String,
        "CharacterSetName" => character_set_name: opt String,
        "PubliclyAccessible" => publicly_accessible: opt bool,
        "Tags" => tags: list Tag,
        "DBClusterIdentifier" => db_cluster_identifier: opt String,
        "StorageType" => storage_type: opt String,
        "TdeCredentialArn" => tde_credential_arn: opt String,
        "TdeCredentialPassword" => tde_credential_password: secret String,
        "StorageEncrypted" => storage_encrypted: opt bool,
        "KmsKeyId" => kms_key_id: opt String,
        "Domain" => domain: opt String,
        "CopyTagsToSnapshot" => copy_tags_to_snapshot: opt bool,
        "MonitoringInterval" => monitoring_interval: opt i32,
        "MonitoringRoleArn" => monitoring_role_arn: opt String,
        "DomainIAMRoleName" => domain_iam_role_name: opt String,
        "PromotionTier" => promotion_tier: opt i32,
        "Timezone" => timezone: opt String,
        "EnableIAMDatabaseAuthentication" => enable_iam_database_authentication: opt bool,
        "EnablePerformanceInsights" => enable_performance_insights: opt bool,
        "PerformanceInsightsKMSKeyId" => performance_insights_kms_key_id: opt String,
        "PerformanceInsightsRetentionPeriod" => performance_insights_retention_period: opt i32,
        "EnableCloudwatchLogsExports" => enable_cloudwatch_logs_exports: list String,
        "ProcessorFeatures" => processor_features: list ProcessorFeature,
        "DeletionProtection" => deletion_protection: opt bool,
        "MaxAllocatedStorage" => max_allocated_storage: opt i32,
    }
}

message! {
    pub struct CreateDbInstanceResponse {
        "DBInstance" => db_instance: opt DbInstance,
    }
}

message! {
    /// Creates a read replica of a source instance.
    ///
    /// The source may live in a different region, in that case it must be
    /// identified by its ARN and `pre_signed_url` must be set.
    #[builder(CreateDbInstanceReadReplica)]
    pub struct CreateDbInstanceReadReplicaRequest {
        "DBInstanceIdentifier" => db_instance_identifier: req String,
        "SourceDBInstanceIdentifier" => source_db_instance_identifier: req String,
        "DBInstanceClass" => db_instance_class: opt String,
        "AvailabilityZone" => availability_zone: opt String,
        "Port" => port: opt i32,
        "MultiAZ" => multi_az: opt bool,
        "AutoMinorVersionUpgrade" => auto_minor_version_upgrade: opt bool,
        "Iops" => iops: opt i32,
        "OptionGroupName" => option_group_name: opt String,
        "DBParameterGroupName" => db_parameter_group_name: opt String,
        "PubliclyAccessible" => publicly_accessible: opt bool,
        "Tags" => tags: list Tag,
        "DBSubnetGroupName" => db_subnet_group_name: opt String,
        "VpcSecurityGroupIds" => vpc_security_group_ids: list String,
        "StorageType" => storage_type: opt String,
        "CopyTagsToSnapshot" => copy_tags_to_snapshot: opt bool,
        "MonitoringInterval" => monitoring_interval: opt i32,
        "MonitoringRoleArn" => monitoring_role_arn: opt String,
        "KmsKeyId" => kms_key_id: opt String,
        "PreSignedUrl" => pre_signed_url: secret String,
        "EnableIAMDatabaseAuthentication" => enable_iam_database_authentication: opt bool,
        "EnablePerformanceInsights" => enable_performance_insights: opt bool,
        "PerformanceInsightsKMSKeyId" => performance_insights_kms_key_id: opt String,
        "PerformanceInsightsRetentionPeriod" => performance_insights_retention_period: opt i32,
        "EnableCloudwatchLogsExports" => enable_cloudwatch_logs_exports: list String,
        "ProcessorFeatures" => processor_features: list ProcessorFeature,
        "UseDefaultProcessorFeatures" => use_default_processor_features: opt bool,
        "DeletionProtection" => deletion_protection: opt bool,
        "Domain" => domain: opt String,
        "DomainIAMRoleName" => domain_iam_role_name: opt String,
    }
}

message! {
    pub struct CreateDbInstanceReadReplicaResponse {
        "DBInstance" => db_instance: opt DbInstance,
    }
}

message! {
    #[builder(DeleteDbInstance)]
    pub struct DeleteDbInstanceRequest {
        "DBInstanceIdentifier" => db_instance_identifier: req String,
        /// Skip the final snapshot. Read replicas and cluster members always
        /// skip it.
        "SkipFinalSnapshot" => skip_final_snapshot: opt bool,
        "FinalDBSnapshotIdentifier" => final_db_snapshot_identifier: opt String,
        "DeleteAutomatedBackups" => delete_automated_backups: opt bool,
    }
}

message! {
    pub struct DeleteDbInstanceResponse {
        "DBInstance" => db_instance: opt DbInstance,
    }
}

message! {
    /// Lists database instances.
    ///
    /// Without an identifier or filters this returns all the instances in the
    /// account and region, `max_records` at a time.
    #[builder(DescribeDbInstances)]
    pub struct DescribeDbInstancesRequest {
        "DBInstanceIdentifier" => db_instance_identifier: opt String,
        "Filters" => filters: list Filter,
        /// The maximum number of records per page, between 20 and 100.
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeDbInstancesResponse {
        "Marker" => marker: opt String,
        "DBInstances" => db_instances: list DbInstance,
    }
}

pageable!(DescribeDbInstancesResponse, db_instances: DbInstance);

message! {
    #[builder(ModifyDbInstance)]
    pub struct ModifyDbInstanceRequest {
        "DBInstanceIdentifier" => db_instance_identifier: req String,
        "AllocatedStorage" => allocated_storage: opt i32,
        "DBInstanceClass" => db_instance_class: opt String,
        "DBSubnetGroupName" => db_subnet_group_name: opt String,
        "DBSecurityGroups" => db_security_groups: list String,
        "VpcSecurityGroupIds" => vpc_security_group_ids: list String,
        /// Apply the changes now instead of in the next maintenance window.
        "ApplyImmediately" => apply_immediately: opt bool,
        "MasterUserPassword" => master_user_password: secret String,
        "DBParameterGroupName" => db_parameter_group_name: opt String,
        "BackupRetentionPeriod" => backup_retention_period: opt i32,
        "PreferredBackupWindow" => preferred_backup_window: opt String,
        "PreferredMaintenanceWindow" => preferred_maintenance_window: opt String,
        "MultiAZ" => multi_az: opt bool,
        "EngineVersion" => engine_version: opt String,
        "AllowMajorVersionUpgrade" => allow_major_version_upgrade: opt bool,
        "AutoMinorVersionUpgrade" => auto_minor_version_upgrade: opt bool,
        "LicenseModel" => license_model: opt String,
        "Iops" => iops: opt i32,
        "OptionGroupName" => option_group_name: opt String,
        "NewDBInstanceIdentifier" => new_db_instance_identifier: opt String,
        "StorageType" => storage_type: opt String,
        "TdeCredentialArn" => tde_credential_arn: opt String,
        "TdeCredentialPassword" => tde_credential_password: secret String,
        "CACertificateIdentifier" => ca_certificate_identifier: opt String,
        "Domain" => domain: opt String,
        "CopyTagsToSnapshot" => copy_tags_to_snapshot: opt bool,
        "MonitoringInterval" => monitoring_interval: opt i32,
        "DBPortNumber" => db_port_number: opt i32,
        "PubliclyAccessible" => publicly_accessible: opt bool,
        "MonitoringRoleArn" => monitoring_role_arn: opt String,
        "DomainIAMRoleName" => domain_iam_role_name: opt String,
        "PromotionTier" => promotion_tier: opt i32,
        "EnableIAMDatabaseAuthentication" => enable_iam_database_authentication: opt bool,
        "EnablePerformanceInsights" => enable_performance_insights: opt bool,
        "PerformanceInsightsKMSKeyId" => performance_insights_kms_key_id: opt String,
        "PerformanceInsightsRetentionPeriod" => performance_insights_retention_period: opt i32,
        "CloudwatchLogsExportConfiguration" => cloudwatch_logs_export_configuration: opt CloudwatchLogsExportConfiguration,
        "ProcessorFeatures" => processor_features: list ProcessorFeature,
        "UseDefaultProcessorFeatures" => use_default_processor_features: opt bool,
        "DeletionProtection" => deletion_protection: opt bool,
        "MaxAllocatedStorage" => max_allocated_storage: opt i32,
        "CertificateRotationRestart" => certificate_rotation_restart: opt bool,
    }
}

message! {
    pub struct ModifyDbInstanceResponse {
        "DBInstance" => db_instance: opt DbInstance,
    }
}

message! {
    #[builder(RebootDbInstance)]
    pub struct RebootDbInstanceRequest {
        "DBInstanceIdentifier" => db_instance_identifier: req String,
        /// Reboot with a failover. Only valid for Multi-AZ instances.
        "ForceFailover" => force_failover: opt bool,
    }
}

message! {
    pub struct RebootDbInstanceResponse {
        "DBInstance" => db_instance: opt DbInstance,
    }
}

message! {
    #[builder(StartDbInstance)]
    pub struct StartDbInstanceRequest {
        "DBInstanceIdentifier" => db_instance_identifier: req String,
    }
}

message! {
    pub struct StartDbInstanceResponse {
        "DBInstance" => db_instance: opt DbInstance,
    }
}

message! {
    #[builder(StopDbInstance)]
    pub struct StopDbInstanceRequest {
        "DBInstanceIdentifier" => db_instance_identifier: req String,
        /// Creates a snapshot with this identifier before stopping.
        "DBSnapshotIdentifier" => db_snapshot_identifier: opt String,
    }
}

message! {
    pub struct StopDbInstanceResponse {
        "DBInstance" => db_instance: opt DbInstance,
    }
}

message! {
    /// Promotes a read replica to a standalone instance.
    #[builder(PromoteReadReplica)]
    pub struct PromoteReadReplicaRequest {
        "DBInstanceIdentifier" => db_instance_identifier: req String,
        "BackupRetentionPeriod" => backup_retention_period: opt i32,
        "PreferredBackupWindow" => preferred_backup_window: opt String,
    }
}

message! {
    pub struct PromoteReadReplicaResponse {
        "DBInstance" => db_instance: opt DbInstance,
    }
}

message! {
    #[builder(RestoreDbInstanceFromS3)]
    pub struct RestoreDbInstanceFromS3Request {
        "DBName" => db_name: opt String,
        "DBInstanceIdentifier" => db_instance_identifier: req String,
        "AllocatedStorage" => allocated_storage: opt i32,
        "DBInstanceClass" => db_instance_class: req String,
        "Engine" => engine: req String,
        "MasterUsername" => master_username: opt String,
        "MasterUserPassword" => master_user_password: secret String,
        "DBSecurityGroups" => db_security_groups: list String,
        "VpcSecurityGroupIds" => vpc_security_group_ids: list String,
        "AvailabilityZone" => availability_zone: opt String,
        "DBSubnetGroupName" => db_subnet_group_name: opt String,
        "PreferredMaintenanceWindow" => preferred_maintenance_window: opt String,
        "DBParameterGroupName" => db_parameter_group_name: opt String,
        "BackupRetentionPeriod" => backup_retention_period: opt i32,
        "PreferredBackupWindow" => preferred_backup_window: opt String,
        "Port" => port: opt i32,
        "MultiAZ" => multi_az: opt bool,
        "EngineVersion" => engine_version: opt String,
        "AutoMinorVersionUpgrade" => auto_minor_version_upgrade: opt bool,
        "LicenseModel" => license_model: opt String,
        "Iops" => iops: opt i32,
        "OptionGroupName" => option_group_name: opt String,
        "PubliclyAccessible" => publicly_accessible: opt bool,
        "Tags" => tags: list Tag,
        "StorageType" => storage_type: opt String,
        "StorageEncrypted" => storage_encrypted: opt bool,
        "KmsKeyId" => kms_key_id: opt String,
        "CopyTagsToSnapshot" => copy_tags_to_snapshot: opt bool,
        "MonitoringInterval" => monitoring_interval: opt i32,
        "MonitoringRoleArn" => monitoring_role_arn: opt String,
        "EnableIAMDatabaseAuthentication" => enable_iam_database_authentication: opt bool,
        "SourceEngine" => source_engine: req String,
        "SourceEngineVersion" => source_engine_version: req String,
        "S3BucketName" => s3_bucket_name: req String,
        "S3Prefix" => s3_prefix: opt String,
        "S3IngestionRoleArn" => s3_ingestion_role_arn: req String,
        "EnablePerformanceInsights" => enable_performance_insights: opt bool,
        "PerformanceInsightsKMSKeyId" => performance_insights_kms_key_id: opt String,
        "PerformanceInsightsRetentionPeriod" => performance_insights_retention_period: opt i32,
        "EnableCloudwatchLogsExports" => enable_cloudwatch_logs_exports: list String,
        "ProcessorFeatures" => processor_features: list ProcessorFeature,
        "UseDefaultProcessorFeatures" => use_default_processor_features: opt bool,
        "DeletionProtection" => deletion_protection: opt bool,
    }
}

message! {
    pub struct RestoreDbInstanceFromS3Response {
        "DBInstance" => db_instance: opt DbInstance,
    }
}

message! {
    /// Creates a new instance from a snapshot.
    #[builder(RestoreDbInstanceFromDbSnapshot)]
    pub struct RestoreDbInstanceFromDbSnapshotRequest {
        "DBInstanceIdentifier" => db_instance_identifier: req String,
        "DBSnapshotIdentifier" => db_snapshot_identifier: req String,
        "DBInstanceClass" => db_instance_class: opt String,
        "Port" => port: opt i32,
        "AvailabilityZone" => availability_zone: opt String,
        "DBSubnetGroupName" => db_subnet_group_name: opt String,
        "MultiAZ" => multi_az: opt bool,
        "PubliclyAccessible" => publicly_accessible: opt bool,
        "AutoMinorVersionUpgrade" => auto_minor_version_upgrade: opt bool,
        "LicenseModel" => license_model: opt String,
        "DBName" => db_name: opt String,
        "Engine" => engine: opt String,
        "Iops" => iops: opt i32,
        "OptionGroupName" => option_group_name: opt String,
        "Tags" => tags: list Tag,
        "StorageType" => storage_type: opt String,
        "TdeCredentialArn" => tde_credential_arn: opt String,
        "TdeCredentialPassword" => tde_credential_password: secret String,
        "VpcSecurityGroupIds" => vpc_security_group_ids: list String,
        "Domain" => domain: opt String,
        "CopyTagsToSnapshot" => copy_tags_to_snapshot: opt bool,
        "DomainIAMRoleName" => domain_iam_role_name: opt String,
        "EnableIAMDatabaseAuthentication" => enable_iam_database_authentication: opt bool,
        "EnableCloudwatchLogsExports" => enable_cloudwatch_logs_exports: list String,
        "ProcessorFeatures" => processor_features: list ProcessorFeature,
        "UseDefaultProcessorFeatures" => use_default_processor_features: opt bool,
        "DBParameterGroupName" => db_parameter_group_name: opt String,
        "DeletionProtection" => deletion_protection: opt bool,
    }
}

message! {
    pub struct RestoreDbInstanceFromDbSnapshotResponse {
        "DBInstance" => db_instance: opt DbInstance,
    }
}

message! {
    /// Restores an instance to an arbitrary point in time, creating a new
    /// instance.
    ///
    /// Set either `restore_time` or `use_latest_restorable_time`, not both.
    #[builder(RestoreDbInstanceToPointInTime)]
    pub struct RestoreDbInstanceToPointInTimeRequest {
        "SourceDBInstanceIdentifier" => source_db_instance_identifier: opt String,
        "TargetDBInstanceIdentifier" => target_db_instance_identifier: req String,
        "RestoreTime" => restore_time: opt Timestamp,
        "UseLatestRestorableTime" => use_latest_restorable_time: opt bool,
        "DBInstanceClass" => db_instance_class: opt String,
        "Port" => port: opt i32,
        "AvailabilityZone" => availability_zone: opt String,
        "DBSubnetGroupName" => db_subnet_group_name: opt String,
        "MultiAZ" => multi_az: opt bool,
        "PubliclyAccessible" => publicly_accessible: opt bool,
        "AutoMinorVersionUpgrade" => auto_minor_version_upgrade: opt bool,
        "LicenseModel" => license_model: opt String,
        "DBName" => db_name: opt String,
        "Engine" => engine: opt String,
        "Iops" => iops: opt i32,
        "OptionGroupName" => option_group_name: opt String,
        "CopyTagsToSnapshot" => copy_tags_to_snapshot: opt bool,
        "Tags" => tags: list Tag,
        "StorageType" => storage_type: opt String,
        "TdeCredentialArn" => tde_credential_arn: opt String,
        "TdeCredentialPassword" => tde_credential_password: secret String,
        "VpcSecurityGroupIds" => vpc_security_group_ids: list String,
        "Domain" => domain: opt String,
        "DomainIAMRoleName" => domain_iam_role_name: opt String,
        "EnableIAMDatabaseAuthentication" => enable_iam_database_authentication: opt bool,
        "EnableCloudwatchLogsExports" => enable_cloudwatch_logs_exports: list String,
        "ProcessorFeatures" => processor_features: list ProcessorFeature,
        "UseDefaultProcessorFeatures" => use_default_processor_features: opt bool,
        "DBParameterGroupName" => db_parameter_group_name: opt String,
        "DeletionProtection" => deletion_protection: opt bool,
        "SourceDbiResourceId" => source_dbi_resource_id: opt String,
        "MaxAllocatedStorage" => max_allocated_storage: opt i32,
    }
}

message! {
    pub struct RestoreDbInstanceToPointInTimeResponse {
        "DBInstance" => db_instance: opt DbInstance,
    }
}

message! {
    /// Associates an IAM role with a database instance.
    #[builder(AddRoleToDbInstance)]
    pub struct AddRoleToDbInstanceRequest {
        "DBInstanceIdentifier" => db_instance_identifier: req String,
        "RoleArn" => role_arn: req String,
        /// The feature using the role, e.g. `s3Import`.
        "FeatureName" => feature_name: req String,
    }
}

message! {
    #[builder(RemoveRoleFromDbInstance)]
    pub struct RemoveRoleFromDbInstanceRequest {
        "DBInstanceIdentifier" => db_instance_identifier: req String,
        "RoleArn" => role_arn: req String,
        "FeatureName" => feature_name: req String,
    }
}

message! {
    /// The earliest and latest time an instance can be restored to.
    pub struct RestoreWindow {
        "EarliestTime" => earliest_time: opt Timestamp,
        "LatestTime" => latest_time: opt Timestamp,
    }
}

message! {
    /// The automated backups retained after an instance is deleted.
    pub struct DbInstanceAutomatedBackup {
        "DBInstanceArn" => db_instance_arn: opt String,
        "DbiResourceId" => dbi_resource_id: opt String,
        "Region" => region: opt String,
        "DBInstanceIdentifier" => db_instance_identifier: opt String,
        "RestoreWindow" => restore_window: opt RestoreWindow,
        "AllocatedStorage" => allocated_storage: opt i32,
        /// One of `active`, `retained`, or `creating`.
        "Status" => status: opt String,
        "Port" => port: opt i32,
        "AvailabilityZone" => availability_zone: opt String,
        "VpcId" => vpc_id: opt String,
        "InstanceCreateTime" => instance_create_time: opt Timestamp,
        "MasterUsername" => master_username: opt String,
        "Engine" => engine: opt String,
        "EngineVersion" => engine_version: opt String,
        "LicenseModel" => license_model: opt String,
        "Iops" => iops: opt i32,
        "OptionGroupName" => option_group_name: opt String,
        "TdeCredentialArn" => tde_credential_arn: opt String,
        "Encrypted" => encrypted: opt bool,
        "StorageType" => storage_type: opt String,
        "KmsKeyId" => kms_key_id: opt String,
        "Timezone" => timezone: opt String,
        "IAMDatabaseAuthenticationEnabled" => iam_database_authentication_enabled: opt bool,
    }
}

message! {
    #[builder(DeleteDbInstanceAutomatedBackup)]
    pub struct DeleteDbInstanceAutomatedBackupRequest {
        "DbiResourceId" => dbi_resource_id: req String,
    }
}

message! {
    pub struct DeleteDbInstanceAutomatedBackupResponse {
        "DBInstanceAutomatedBackup" => db_instance_automated_backup: opt DbInstanceAutomatedBackup,
    }
}

message! {
    #[builder(DescribeDbInstanceAutomatedBackups)]
    pub struct DescribeDbInstanceAutomatedBackupsRequest {
        "DbiResourceId" => dbi_resource_id: opt String,
        "DBInstanceIdentifier" => db_instance_identifier: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeDbInstanceAutomatedBackupsResponse {
        "Marker" => marker: opt String,
        "DBInstanceAutomatedBackups" => db_instance_automated_backups: list DbInstanceAutomatedBackup,
    }
}

pageable!(
    DescribeDbInstanceAutomatedBackupsResponse,
    db_instance_automated_backups: DbInstanceAutomatedBackup
);

message! {
    #[builder(DescribeValidDbInstanceModifications)]
    pub struct DescribeValidDbInstanceModificationsRequest {
        "DBInstanceIdentifier" => db_instance_identifier: req String,
    }
}

message! {
    /// The storage options an instance can be modified to.
    pub struct ValidStorageOptions {
        "StorageType" => storage_type: opt String,
        "StorageSize" => storage_size: list Range,
        "ProvisionedIops" => provisioned_iops: list Range,
        "IopsToStorageRatio" => iops_to_storage_ratio: list DoubleRange,
        "SupportsStorageAutoscaling" => supports_storage_autoscaling: opt bool,
    }
}

message! {
    pub struct ValidDbInstanceModificationsMessage {
        "Storage" => storage: list ValidStorageOptions,
        "ValidProcessorFeatures" => valid_processor_features: list AvailableProcessorFeature,
    }
}

message! {
    pub struct DescribeValidDbInstanceModificationsResponse {
        "ValidDBInstanceModificationsMessage" => valid_db_instance_modifications_message: opt ValidDbInstanceModificationsMessage,
    }
}

message! {
    /// An instance class available for an engine, engine version, and
    /// license model.
    pub struct OrderableDbInstanceOption {
        "Engine" => engine: opt String,
        "EngineVersion" => engine_version: opt String,
        "DBInstanceClass" => db_instance_class: opt String,
        "LicenseModel" => license_model: opt String,
        "AvailabilityZones" => availability_zones: list AvailabilityZone,
        "MultiAZCapable" => multi_az_capable: opt bool,
        "ReadReplicaCapable" => read_replica_capable: opt bool,
        "Vpc" => vpc: opt bool,
        "SupportsStorageEncryption" => supports_storage_encryption: opt bool,
        "StorageType" => storage_type: opt String,
        "SupportsIops" => supports_iops: opt bool,
        "SupportsEnhancedMonitoring" => supports_enhanced_monitoring: opt bool,
        "SupportsIAMDatabaseAuthentication" => supports_iam_database_authentication: opt bool,
        "SupportsPerformanceInsights" => supports_performance_insights: opt bool,
        "MinStorageSize" => min_storage_size: opt i32,
        "MaxStorageSize" => max_storage_size: opt i32,
        "MinIopsPerDbInstance" => min_iops_per_db_instance: opt i32,
        "MaxIopsPerDbInstance" => max_iops_per_db_instance: opt i32,
        "MinIopsPerGib" => min_iops_per_gib: opt f64,
        "MaxIopsPerGib" => max_iops_per_gib: opt f64,
        "AvailableProcessorFeatures" => available_processor_features: list AvailableProcessorFeature,
        "SupportedEngineModes" => supported_engine_modes: list String,
        "SupportsStorageAutoscaling" => supports_storage_autoscaling: opt bool,
        "SupportsKerberosAuthentication" => supports_kerberos_authentication: opt bool,
    }
}

message! {
    #[builder(DescribeOrderableDbInstanceOptions)]
    pub struct DescribeOrderableDbInstanceOptionsRequest {
        "Engine" => engine: req String,
        "EngineVersion" => engine_version: opt String,
        "DBInstanceClass" => db_instance_class: opt String,
        "LicenseModel" => license_model: opt String,
        "AvailabilityZoneGroup" => availability_zone_group: opt String,
        /// Only return VPC (or non-VPC) offerings.
        "Vpc" => vpc: opt bool,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeOrderableDbInstanceOptionsResponse {
        "OrderableDBInstanceOptions" => orderable_db_instance_options: list OrderableDbInstanceOption,
        "Marker" => marker: opt String,
    }
}

pageable!(
    DescribeOrderableDbInstanceOptionsResponse,
    orderable_db_instance_options: OrderableDbInstanceOption
);

message! {
    pub struct CharacterSet {
        "CharacterSetName" => character_set_name: opt String,
        "CharacterSetDescription" => character_set_description: opt String,
    }
}

message! {
    /// A version an engine can be upgraded to.
    pub struct UpgradeTarget {
        "Engine" => engine: opt String,
        "EngineVersion" => engine_version: opt String,
        "Description" => description: opt String,
        "AutoUpgrade" => auto_upgrade: opt bool,
        "IsMajorVersionUpgrade" => is_major_version_upgrade: opt bool,
    }
}

message! {
    /// An engine version.
    pub struct DbEngineVersion {
        "Engine" => engine: opt String,
        "EngineVersion" => engine_version: opt String,
        "DBParameterGroupFamily" => db_parameter_group_family: opt String,
        "DBEngineDescription" => db_engine_description: opt String,
        "DBEngineVersionDescription" => db_engine_version_description: opt String,
        "DefaultCharacterSet" => default_character_set: opt CharacterSet,
        "SupportedCharacterSets" => supported_character_sets: list CharacterSet,
        "ValidUpgradeTarget" => valid_upgrade_target: list UpgradeTarget,
        "SupportedTimezones" => supported_timezones: list Timezone,
        "ExportableLogTypes" => exportable_log_types: list String,
        "SupportsLogExportsToCloudwatchLogs" => supports_log_exports_to_cloudwatch_logs: opt bool,
        "SupportsReadReplica" => supports_read_replica: opt bool,
        "SupportedEngineModes" => supported_engine_modes: list String,
        "SupportedFeatureNames" => supported_feature_names: list String,
        "Status" => status: opt String,
        "SupportsParallelQuery" => supports_parallel_query: opt bool,
        "SupportsGlobalDatabases" => supports_global_databases: opt bool,
    }
}

message! {
    #[builder(DescribeDbEngineVersions)]
    pub struct DescribeDbEngineVersionsRequest {
        "Engine" => engine: opt String,
        "EngineVersion" => engine_version: opt String,
        "DBParameterGroupFamily" => db_parameter_group_family: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
        /// Only return the default version of each engine.
        "DefaultOnly" => default_only: opt bool,
        "ListSupportedCharacterSets" => list_supported_character_sets: opt bool,
        "ListSupportedTimezones" => list_supported_timezones: opt bool,
        "IncludeAll" => include_all: opt bool,
    }
}

message! {
    pub struct DescribeDbEngineVersionsResponse {
        "Marker" => marker: opt String,
        "DBEngineVersions" => db_engine_versions: list DbEngineVersion,
    }
}

pageable!(DescribeDbEngineVersionsResponse, db_engine_versions: DbEngineVersion);

message! {
    pub struct DescribeDbLogFilesDetails {
        "LogFileName" => log_file_name: opt String,
        /// Milliseconds since the Unix epoch.
        "LastWritten" => last_written: opt i64,
        "Size" => size: opt i64,
    }
}

message! {
    #[builder(DescribeDbLogFiles)]
    pub struct DescribeDbLogFilesRequest {
        "DBInstanceIdentifier" => db_instance_identifier: req String,
        "FilenameContains" => filename_contains: opt String,
        "FileLastWritten" => file_last_written: opt i64,
        "FileSize" => file_size: opt i64,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeDbLogFilesResponse {
        "DescribeDBLogFiles" => describe_db_log_files: list DescribeDbLogFilesDetails,
        "Marker" => marker: opt String,
    }
}

pageable!(DescribeDbLogFilesResponse, describe_db_log_files: DescribeDbLogFilesDetails);

message! {
    /// Downloads part of a log file.
    ///
    /// Use `marker` to continue from the end of a previous download.
    #[builder(DownloadDbLogFilePortion)]
    pub struct DownloadDbLogFilePortionRequest {
        "DBInstanceIdentifier" => db_instance_identifier: req String,
        "LogFileName" => log_file_name: req String,
        "Marker" => marker: opt String,
        "NumberOfLines" => number_of_lines: opt i32,
    }
}

message! {
    pub struct DownloadDbLogFilePortionResponse {
        "LogFileData" => log_file_data: opt String,
        "Marker" => marker: opt String,
        "AdditionalDataPending" => additional_data_pending: opt bool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::paginator::PageableResponse;
    use serde_json::json;

    #[test]
    fn db_instance_wire_names() -> anyhow::Result<()> {
        let instance = DbInstance::new()
            .set_db_instance_identifier("my-db")
            .set_multi_az(true)
            .set_iam_database_authentication_enabled(false)
            .set_ca_certificate_identifier("rds-ca-2019")
            .set_endpoint(Endpoint::new().set_address("my-db.example.com").set_port(5432));
        let got = serde_json::to_value(&instance)?;
        let want = json!({
            "DBInstanceIdentifier": "my-db",
            "MultiAZ": true,
            "IAMDatabaseAuthenticationEnabled": false,
            "CACertificateIdentifier": "rds-ca-2019",
            "Endpoint": {"Address": "my-db.example.com", "Port": 5432},
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn unknown_fields_are_preserved() -> anyhow::Result<()> {
        let input = json!({
            "DBInstanceIdentifier": "my-db",
            "NetworkType": "DUAL",
            "Endpoint": {"Address": "a.example.com", "IPv6": "::1"},
        });
        let instance = serde_json::from_value::<DbInstance>(input.clone())?;
        assert_eq!(instance.db_instance_identifier.as_deref(), Some("my-db"));
        assert_eq!(serde_json::to_value(&instance)?, input);
        Ok(())
    }

    #[test]
    fn timestamps() -> anyhow::Result<()> {
        let input = json!({"InstanceCreateTime": "2020-06-01T12:30:00Z"});
        let instance = serde_json::from_value::<DbInstance>(input)?;
        let want = chrono::DateTime::parse_from_rfc3339("2020-06-01T12:30:00Z")?;
        assert_eq!(instance.instance_create_time, Some(want.to_utc()));
        Ok(())
    }

    #[test]
    fn null_fields() -> anyhow::Result<()> {
        let input = json!({"DBInstances": null, "Marker": null});
        let response = serde_json::from_value::<DescribeDbInstancesResponse>(input)?;
        assert_eq!(response, DescribeDbInstancesResponse::default());

        let input = json!({"DBInstanceIdentifier": "my-db", "VpcSecurityGroups": null});
        let instance = serde_json::from_value::<DbInstance>(input)?;
        assert_eq!(instance.db_instance_identifier.as_deref(), Some("my-db"));
        assert!(instance.vpc_security_groups.is_empty(), "{instance:?}");
        Ok(())
    }

    #[test]
    fn secrets_are_censored() -> anyhow::Result<()> {
        let request = CreateDbInstanceRequest::new()
            .set_db_instance_identifier("my-db")
            .set_master_user_password("hunter2")
            .set_tde_credential_password("tde-secret");
        let debug = format!("{request:?}");
        assert!(debug.contains("my-db"), "{debug}");
        assert!(debug.contains("[censored]"), "{debug}");
        assert!(!debug.contains("hunter2"), "{debug}");
        assert!(!debug.contains("tde-secret"), "{debug}");

        let got = serde_json::to_value(&request)?;
        assert_eq!(got["MasterUserPassword"], json!("hunter2"));
        assert_eq!(got["TdeCredentialPassword"], json!("tde-secret"));

        let debug = format!("{:?}", CreateDbInstanceRequest::new());
        assert!(!debug.contains("[censored]"), "{debug}");
        Ok(())
    }

    #[test]
    fn request_defaults_are_omitted() -> anyhow::Result<()> {
        let request = DescribeDbInstancesRequest::new();
        assert_eq!(serde_json::to_value(&request)?, json!({}));

        let request = DeleteDbInstanceRequest::new()
            .set_db_instance_identifier("my-db")
            .set_skip_final_snapshot(false)
            .set_or_clear_final_db_snapshot_identifier(None::<String>);
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({"DBInstanceIdentifier": "my-db", "SkipFinalSnapshot": false})
        );
        Ok(())
    }

    #[test]
    fn pageable() {
        let response = DescribeDbInstancesResponse::new()
            .set_marker("next")
            .set_db_instances([
                DbInstance::new().set_db_instance_identifier("db-1"),
                DbInstance::new().set_db_instance_identifier("db-2"),
            ]);
        assert_eq!(response.next_page_token(), "next");
        let items = response.items();
        assert_eq!(items.len(), 2);

        let response = DescribeDbInstancesResponse::new();
        assert_eq!(response.next_page_token(), "");
    }
}
