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

//! Aurora clusters, their custom endpoints, backtracks, and activity
//! streams.

use super::*;

message! {
    /// An Aurora cluster.
    pub struct DbCluster {
        "AllocatedStorage" => allocated_storage: opt i32,
        "AvailabilityZones" => availability_zones: list String,
        "BackupRetentionPeriod" => backup_retention_period: opt i32,
        "CharacterSetName" => character_set_name: opt String,
        "DatabaseName" => database_name: opt String,
        "DBClusterIdentifier" => db_cluster_identifier: opt String,
        "DBClusterParameterGroup" => db_cluster_parameter_group: opt String,
        "DBSubnetGroup" => db_subnet_group: opt String,
        "Status" => status: opt String,
        "PercentProgress" => percent_progress: opt String,
        "EarliestRestorableTime" => earliest_restorable_time: opt Timestamp,
        /// The writer endpoint.
        "Endpoint" => endpoint: opt String,
        /// Load-balances connections across the readers.
        "ReaderEndpoint" => reader_endpoint: opt String,
        "CustomEndpoints" => custom_endpoints: list String,
        "MultiAZ" => multi_az: opt bool,
        "Engine" => engine: opt String,
        "EngineVersion" => engine_version: opt String,
        "LatestRestorableTime" => latest_restorable_time: opt Timestamp,
        "Port" => port: opt i32,
        "MasterUsername" => master_username: opt String,
        "DBClusterOptionGroupMemberships" => db_cluster_option_group_memberships: list DbClusterOptionGroupStatus,
        "PreferredBackupWindow" => preferred_backup_window: opt String,
        "PreferredMaintenanceWindow" => preferred_maintenance_window: opt String,
        "ReplicationSourceIdentifier" => replication_source_identifier: opt String,
        "ReadReplicaIdentifiers" => read_replica_identifiers: list String,
        "DBClusterMembers" => db_cluster_members: list DbClusterMember,
        "VpcSecurityGroups" => vpc_security_groups: list VpcSecurityGroupMembership,
        "HostedZoneId" => hosted_zone_id: opt String,
        "StorageEncrypted" => storage_encrypted: opt bool,
        "KmsKeyId" => kms_key_id: opt String,
        "DbClusterResourceId" => db_cluster_resource_id: opt String,
        "DBClusterArn" => db_cluster_arn: opt String,
        "AssociatedRoles" => associated_roles: list DbClusterRole,
        "IAMDatabaseAuthenticationEnabled" => iam_database_authentication_enabled: opt bool,
        "CloneGroupId" => clone_group_id: opt String,
        "ClusterCreateTime" => cluster_create_time: opt Timestamp,
        "EarliestBacktrackTime" => earliest_backtrack_time: opt Timestamp,
        /// The target backtrack window, in seconds. Zero if backtracking is
        /// disabled.
        "BacktrackWindow" => backtrack_window: opt i64,
        "BacktrackConsumedChangeRecords" => backtrack_consumed_change_records: opt i64,
        "EnabledCloudwatchLogsExports" => enabled_cloudwatch_logs_exports: list String,
        /// The current capacity of a serverless cluster.
        "Capacity" => capacity: opt i32,
        /// One of `provisioned`, `serverless`, `parallelquery`, `global`, or
        /// `multimaster`.
        "EngineMode" => engine_mode: opt String,
        "ScalingConfigurationInfo" => scaling_configuration_info: opt ScalingConfigurationInfo,
        "DeletionProtection" => deletion_protection: opt bool,
        "HttpEndpointEnabled" => http_endpoint_enabled: opt bool,
        "ActivityStreamMode" => activity_stream_mode: opt String,
        "ActivityStreamStatus" => activity_stream_status: opt String,
        "ActivityStreamKmsKeyId" => activity_stream_kms_key_id: opt String,
        "ActivityStreamKinesisStreamName" => activity_stream_kinesis_stream_name: opt String,
        "CopyTagsToSnapshot" => copy_tags_to_snapshot: opt bool,
        "CrossAccountClone" => cross_account_clone: opt bool,
        "DomainMemberships" => domain_memberships: list DomainMembership,
        "GlobalWriteForwardingStatus" => global_write_forwarding_status: opt String,
        "GlobalWriteForwardingRequested" => global_write_forwarding_requested: opt bool,
    }
}

message! {
    pub struct DbClusterOptionGroupStatus {
        "DBClusterOptionGroupName" => db_cluster_option_group_name: opt String,
        "Status" => status: opt String,
    }
}

message! {
    /// An instance that is part of a cluster.
    pub struct DbClusterMember {
        "DBInstanceIdentifier" => db_instance_identifier: opt String,
        /// `true` for the primary (writer) instance.
        "IsClusterWriter" => is_cluster_writer: opt bool,
        "DBClusterParameterGroupStatus" => db_cluster_parameter_group_status: opt String,
        "PromotionTier" => promotion_tier: opt i32,
    }
}

message! {
    /// An IAM role associated with a cluster.
    pub struct DbClusterRole {
        "RoleArn" => role_arn: opt String,
        /// One of `ACTIVE`, `PENDING`, or `INVALID`.
        "Status" => status: opt String,
        "FeatureName" => feature_name: opt String,
    }
}

message! {
    #[builder(CreateDbCluster)]
    pub struct CreateDbClusterRequest {
        "AvailabilityZones" => availability_zones: list String,
        "BackupRetentionPeriod" => backup_retention_period: opt i32,
        "CharacterSetName" => character_set_name: opt String,
        "DatabaseName" => database_name: opt String,
        "DBClusterIdentifier" => db_cluster_identifier: req String,
        "DBClusterParameterGroupName" => db_cluster_parameter_group_name: opt String,
        "VpcSecurityGroupIds" => vpc_security_group_ids: list String,
        "DBSubnetGroupName" => db_subnet_group_name: opt String,
        "Engine" => engine: req String,
        "EngineVersion" => engine_version: opt String,
        "Port" => port: opt i32,
        "MasterUsername" => master_username: opt String,
        "MasterUserPassword" => master_user_password: secret String,
        "OptionGroupName" => option_group_name: opt String,
        "PreferredBackupWindow" => preferred_backup_window: opt String,
        "PreferredMaintenanceWindow" => preferred_maintenance_window: opt String,
        /// Creates the cluster as a read replica of this source.
        "ReplicationSourceIdentifier" => replication_source_identifier: opt String,
        "Tags" => tags: list Tag,
        "StorageEncrypted" => storage_encrypted: opt bool,
        "KmsKeyId" => kms_key_id: opt String,
        "PreSignedUrl" => pre_signed_url: secret String,
        "EnableIAMDatabaseAuthentication" => enable_iam_database_authentication: opt bool,
        "BacktrackWindow" => backtrack_window: opt i64,
        "EnableCloudwatchLogsExports" => enable_cloudwatch_logs_exports: list String,
        "EngineMode" => engine_mode: opt String,
        "ScalingConfiguration" => scaling_configuration: opt ScalingConfiguration,
        "DeletionProtection" => deletion_protection: opt bool,
        "GlobalClusterIdentifier" => global_cluster_identifier: opt String,
        "EnableHttpEndpoint" => enable_http_endpoint: opt bool,
        "CopyTagsToSnapshot" => copy_tags_to_snapshot: opt bool,
        "Domain" => domain: opt String,
        "DomainIAMRoleName" => domain_iam_role_name: opt String,
    }
}

message! {
    pub struct CreateDbClusterResponse {
        "DBCluster" => db_cluster: opt DbCluster,
    }
}

message! {
    #[builder(DeleteDbCluster)]
    pub struct DeleteDbClusterRequest {
        "DBClusterIdentifier" => db_cluster_identifier: req String,
        "SkipFinalSnapshot" => skip_final_snapshot: opt bool,
        "FinalDBSnapshotIdentifier" => final_db_snapshot_identifier: opt String,
    }
}

message! {
    pub struct DeleteDbClusterResponse {
        "DBCluster" => db_cluster: opt DbCluster,
    }
}

message! {
    #[builder(DescribeDbClusters)]
    pub struct DescribeDbClustersRequest {
        "DBClusterIdentifier" => db_cluster_identifier: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
        "IncludeShared" => include_shared: opt bool,
    }
}

message! {
    pub struct DescribeDbClustersResponse {
        "Marker" => marker: opt String,
        "DBClusters" => db_clusters: list DbCluster,
    }
}

pageable!(DescribeDbClustersResponse, db_clusters: DbCluster);

message! {
    #[builder(ModifyDbCluster)]
    pub struct ModifyDbClusterRequest {
        "DBClusterIdentifier" => db_cluster_identifier: req String,
        "NewDBClusterIdentifier" => new_db_cluster_identifier: opt String,
        "ApplyImmediately" => apply_immediately: opt bool,
        "BackupRetentionPeriod" => backup_retention_period: opt i32,
        "DBClusterParameterGroupName" => db_cluster_parameter_group_name: opt String,
        "VpcSecurityGroupIds" => vpc_security_group_ids: list String,
        "Port" => port: opt i32,
        "MasterUserPassword" => master_user_password: secret String,
        "OptionGroupName" => option_group_name: opt String,
        "PreferredBackupWindow" => preferred_backup_window: opt String,
        "PreferredMaintenanceWindow" => preferred_maintenance_window: opt String,
        "EnableIAMDatabaseAuthentication" => enable_iam_database_authentication: opt bool,
        "BacktrackWindow" => backtrack_window: opt i64,
        "CloudwatchLogsExportConfiguration" => cloudwatch_logs_export_configuration: opt CloudwatchLogsExportConfiguration,
        "EngineVersion" => engine_version: opt String,
        "AllowMajorVersionUpgrade" => allow_major_version_upgrade: opt bool,
        "DBInstanceParameterGroupName" => db_instance_parameter_group_name: opt String,
        "Domain" => domain: opt String,
        "DomainIAMRoleName" => domain_iam_role_name: opt String,
        "ScalingConfiguration" => scaling_configuration: opt ScalingConfiguration,
        "DeletionProtection" => deletion_protection: opt bool,
        "EnableHttpEndpoint" => enable_http_endpoint: opt bool,
        "CopyTagsToSnapshot" => copy_tags_to_snapshot: opt bool,
    }
}

message! {
    pub struct ModifyDbClusterResponse {
        "DBCluster" => db_cluster: opt DbCluster,
    }
}

message! {
    /// Forces a failover, promoting one of the readers to writer.
    #[builder(FailoverDbCluster)]
    pub struct FailoverDbClusterRequest {
        "DBClusterIdentifier" => db_cluster_identifier: req String,
        /// The reader to promote. The service picks one if unset.
        "TargetDBInstanceIdentifier" => target_db_instance_identifier: opt String,
    }
}

message! {
    pub struct FailoverDbClusterResponse {
        "DBCluster" => db_cluster: opt DbCluster,
    }
}

message! {
    #[builder(StartDbCluster)]
    pub struct StartDbClusterRequest {
        "DBClusterIdentifier" => db_cluster_identifier: req String,
    }
}

message! {
    pub struct StartDbClusterResponse {
        "DBCluster" => db_cluster: opt DbCluster,
    }
}

message! {
    #[builder(StopDbCluster)]
    pub struct StopDbClusterRequest {
        "DBClusterIdentifier" => db_cluster_identifier: req String,
    }
}

message! {
    pub struct StopDbClusterResponse {
        "DBCluster" => db_cluster: opt DbCluster,
    }
}

message! {
    /// Rewinds a cluster to a point in time, without creating a new cluster.
    #[builder(BacktrackDbCluster)]
    pub struct BacktrackDbClusterRequest {
        "DBClusterIdentifier" => db_cluster_identifier: req String,
        "BacktrackTo" => backtrack_to: opt Timestamp,
        "Force" => force: opt bool,
        "UseEarliestTimeOnPointInTimeUnavailable" => use_earliest_time_on_point_in_time_unavailable: opt bool,
    }
}

message! {
    pub struct BacktrackDbClusterResponse {
        "DBClusterIdentifier" => db_cluster_identifier: opt String,
        "BacktrackIdentifier" => backtrack_identifier: opt String,
        "BacktrackTo" => backtrack_to: opt Timestamp,
        "BacktrackedFrom" => backtracked_from: opt Timestamp,
        "BacktrackRequestCreationTime" => backtrack_request_creation_time: opt Timestamp,
        "Status" => status: opt String,
    }
}

message! {
    pub struct DbClusterBacktrack {
        "DBClusterIdentifier" => db_cluster_identifier: opt String,
        "BacktrackIdentifier" => backtrack_identifier: opt String,
        "BacktrackTo" => backtrack_to: opt Timestamp,
        "BacktrackedFrom" => backtracked_from: opt Timestamp,
        "BacktrackRequestCreationTime" => backtrack_request_creation_time: opt Timestamp,
        /// One of `applying`, `completed`, `failed`, or `pending`.
        "Status" => status: opt String,
    }
}

message! {
    #[builder(DescribeDbClusterBacktracks)]
    pub struct DescribeDbClusterBacktracksRequest {
        "DBClusterIdentifier" => db_cluster_identifier: req String,
        "BacktrackIdentifier" => backtrack_identifier: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeDbClusterBacktracksResponse {
        "Marker" => marker: opt String,
        "DBClusterBacktracks" => db_cluster_backtracks: list DbClusterBacktrack,
    }
}

pageable!(DescribeDbClusterBacktracksResponse, db_cluster_backtracks: DbClusterBacktrack);

message! {
    /// Promotes a read replica cluster to a standalone cluster.
    #[builder(PromoteReadReplicaDbCluster)]
    pub struct PromoteReadReplicaDbClusterRequest {
        "DBClusterIdentifier" => db_cluster_identifier: req String,
    }
}

message! {
    pub struct PromoteReadReplicaDbClusterResponse {
        "DBCluster" => db_cluster: opt DbCluster,
    }
}

message! {
    /// Creates a cluster from a backup of a MySQL database stored in S3.
    #[builder(RestoreDbClusterFromS3)]
    pub struct RestoreDbClusterFromS3Request {
        "AvailabilityZones" => availability_zones: list String,
        "BackupRetentionPeriod" => backup_retention_period: opt i32,
        "CharacterSetName" => character_set_name: opt String,
        "DatabaseName" => database_name: opt String,
        "DBClusterIdentifier" => db_cluster_identifier: req String,
        "DBClusterParameterGroupName" => db_cluster_parameter_group_name: opt String,
        "VpcSecurityGroupIds" => vpc_security_group_ids: list String,
        "DBSubnetGroupName" => db_subnet_group_name: opt String,
        "Engine" => engine: req String,
        "EngineVersion" => engine_version: opt String,
        "Port" => port: opt i32,
        "MasterUsername" => master_username: req String,
        "MasterUserPassword" => master_user_password: secret String,
        "OptionGroupName" => option_group_name: opt String,
        "PreferredBackupWindow" => preferred_backup_window: opt String,
        "PreferredMaintenanceWindow" => preferred_maintenance_window: opt String,
        "Tags" => tags: list Tag,
        "StorageEncrypted" => storage_encrypted: opt bool,
        "KmsKeyId" => kms_key_id: opt String,
        "EnableIAMDatabaseAuthentication" => enable_iam_database_authentication: opt bool,
        /// Only `mysql` is supported.
        "SourceEngine" => source_engine: req String,
        "SourceEngineVersion" => source_engine_version: req String,
        "S3BucketName" => s3_bucket_name: req String,
        "S3Prefix" => s3_prefix: opt String,
        /// The role that authorizes the service to read the bucket.
        "S3IngestionRoleArn" => s3_ingestion_role_arn: req String,
        "BacktrackWindow" => backtrack_window: opt i64,
        "EnableCloudwatchLogsExports" => enable_cloudwatch_logs_exports: list String,
        "DeletionProtection" => deletion_protection: opt bool,
        "CopyTagsToSnapshot" => copy_tags_to_snapshot: opt bool,
        "Domain" => domain: opt String,
        "DomainIAMRoleName" => domain_iam_role_name: opt String,
    }
}

message! {
    pub struct RestoreDbClusterFromS3Response {
        "DBCluster" => db_cluster: opt DbCluster,
    }
}

message! {
    #[builder(RestoreDbClusterFromSnapshot)]
    pub struct RestoreDbClusterFromSnapshotRequest {
        "AvailabilityZones" => availability_zones: list String,
        "DBClusterIdentifier" => db_cluster_identifier: req String,
        /// A cluster snapshot or an instance snapshot identifier.
        "SnapshotIdentifier" => snapshot_identifier: req String,
        "Engine" => engine: req String,
        "EngineVersion" => engine_version: opt String,
        "Port" => port: opt i32,
        "DBSubnetGroupName" => db_subnet_group_name: opt String,
        "DatabaseName" => database_name: opt String,
        "OptionGroupName" => option_group_name: opt String,
        "VpcSecurityGroupIds" => vpc_security_group_ids: list String,
        "Tags" => tags: list Tag,
        "KmsKeyId" => kms_key_id: opt String,
        "EnableIAMDatabaseAuthentication" => enable_iam_database_authentication: opt bool,
        "BacktrackWindow" => backtrack_window: opt i64,
        "EnableCloudwatchLogsExports" => enable_cloudwatch_logs_exports: list String,
        "EngineMode" => engine_mode: opt String,
        "ScalingConfiguration" => scaling_configuration: opt ScalingConfiguration,
        "DBClusterParameterGroupName" => db_cluster_parameter_group_name: opt String,
        "DeletionProtection" => deletion_protection: opt bool,
        "CopyTagsToSnapshot" => copy_tags_to_snapshot: opt bool,
        "Domain" => domain: opt String,
        "DomainIAMRoleName" => domain_iam_role_name: opt String,
    }
}

message! {
    pub struct RestoreDbClusterFromSnapshotResponse {
        "DBCluster" => db_cluster: opt DbCluster,
    }
}

message! {
    /// Restores a cluster to a point in time, creating a new cluster.
    #[builder(RestoreDbClusterToPointInTime)]
    pub struct RestoreDbClusterToPointInTimeRequest {
        "DBClusterIdentifier" => db_cluster_identifier: req String,
        /// `full-copy` (the default) or `copy-on-write`.
        "RestoreType" => restore_type: opt String,
        "SourceDBClusterIdentifier" => source_db_cluster_identifier: req String,
        "RestoreToTime" => restore_to_time: opt Timestamp,
        "UseLatestRestorableTime" => use_latest_restorable_time: opt bool,
        "Port" => port: opt i32,
        "DBSubnetGroupName" => db_subnet_group_name: opt String,
        "OptionGroupName" => option_group_name: opt String,
        "VpcSecurityGroupIds" => vpc_security_group_ids: list String,
        "Tags" => tags: list Tag,
        "KmsKeyId" => kms_key_id: opt String,
        "EnableIAMDatabaseAuthentication" => enable_iam_database_authentication: opt bool,
        "BacktrackWindow" => backtrack_window: opt i64,
        "EnableCloudwatchLogsExports" => enable_cloudwatch_logs_exports: list String,
        "DBClusterParameterGroupName" => db_cluster_parameter_group_name: opt String,
        "DeletionProtection" => deletion_protection: opt bool,
        "CopyTagsToSnapshot" => copy_tags_to_snapshot: opt bool,
        "Domain" => domain: opt String,
        "DomainIAMRoleName" => domain_iam_role_name: opt String,
    }
}

message! {
    pub struct RestoreDbClusterToPointInTimeResponse {
        "DBCluster" => db_cluster: opt DbCluster,
    }
}

message! {
    /// Associates an IAM role with a cluster.
    #[builder(AddRoleToDbCluster)]
    pub struct AddRoleToDbClusterRequest {
        "DBClusterIdentifier" => db_cluster_identifier: req String,
        "RoleArn" => role_arn: req String,
        "FeatureName" => feature_name: opt String,
    }
}

message! {
    #[builder(RemoveRoleFromDbCluster)]
    pub struct RemoveRoleFromDbClusterRequest {
        "DBClusterIdentifier" => db_cluster_identifier: req String,
        "RoleArn" => role_arn: req String,
        "FeatureName" => feature_name: opt String,
    }
}

message! {
    /// Sets the capacity of a serverless cluster.
    #[builder(ModifyCurrentDbClusterCapacity)]
    pub struct ModifyCurrentDbClusterCapacityRequest {
        "DBClusterIdentifier" => db_cluster_identifier: req String,
        "Capacity" => capacity: opt i32,
        "SecondsBeforeTimeout" => seconds_before_timeout: opt i32,
        /// `ForceApplyCapacityChange` or `RollbackCapacityChange`.
        "TimeoutAction" => timeout_action: opt String,
    }
}

message! {
    pub struct ModifyCurrentDbClusterCapacityResponse {
        "DBClusterIdentifier" => db_cluster_identifier: opt String,
        "PendingCapacity" => pending_capacity: opt i32,
        "CurrentCapacity" => current_capacity: opt i32,
        "SecondsBeforeTimeout" => seconds_before_timeout: opt i32,
        "TimeoutAction" => timeout_action: opt String,
    }
}

message! {
    /// A custom endpoint of a cluster.
    pub struct DbClusterEndpoint {
        "DBClusterEndpointIdentifier" => db_cluster_endpoint_identifier: opt String,
        "DBClusterIdentifier" => db_cluster_identifier: opt String,
        "DBClusterEndpointResourceIdentifier" => db_cluster_endpoint_resource_identifier: opt String,
        "Endpoint" => endpoint: opt String,
        "Status" => status: opt String,
        "EndpointType" => endpoint_type: opt String,
        "CustomEndpointType" => custom_endpoint_type: opt String,
        "StaticMembers" => static_members: list String,
        "ExcludedMembers" => excluded_members: list String,
        "DBClusterEndpointArn" => db_cluster_endpoint_arn: opt String,
    }
}

message! {
    #[builder(CreateDbClusterEndpoint)]
    pub struct CreateDbClusterEndpointRequest {
        "DBClusterIdentifier" => db_cluster_identifier: req String,
        "DBClusterEndpointIdentifier" => db_cluster_endpoint_identifier: req String,
        /// `READER`, `WRITER`, or `ANY`.
        "EndpointType" => endpoint_type: req String,
        "StaticMembers" => static_members: list String,
        "ExcludedMembers" => excluded_members: list String,
        "Tags" => tags: list Tag,
    }
}

message! {
    pub struct CreateDbClusterEndpointResponse {
        "DBClusterEndpointIdentifier" => db_cluster_endpoint_identifier: opt String,
        "DBClusterIdentifier" => db_cluster_identifier: opt String,
        "DBClusterEndpointResourceIdentifier" => db_cluster_endpoint_resource_identifier: opt String,
        "Endpoint" => endpoint: opt String,
        "Status" => status: opt String,
        "EndpointType" => endpoint_type: opt String,
        "CustomEndpointType" => custom_endpoint_type: opt String,
        "StaticMembers" => static_members: list String,
        "ExcludedMembers" => excluded_members: list String,
        "DBClusterEndpointArn" => db_cluster_endpoint_arn: opt String,
    }
}

message! {
    #[builder(DeleteDbClusterEndpoint)]
    pub struct DeleteDbClusterEndpointRequest {
        "DBClusterEndpointIdentifier" => db_cluster_endpoint_identifier: req String,
    }
}

message! {
    pub struct DeleteDbClusterEndpointResponse {
        "DBClusterEndpointIdentifier" => db_cluster_endpoint_identifier: opt String,
        "DBClusterIdentifier" => db_cluster_identifier: opt String,
        "DBClusterEndpointResourceIdentifier" => db_cluster_endpoint_resource_identifier: opt String,
        "Endpoint" => endpoint: opt String,
        "Status" => status: opt String,
        "EndpointType" => endpoint_type: opt String,
        "CustomEndpointType" => custom_endpoint_type: opt String,
        "StaticMembers" => static_members: list String,
        "ExcludedMembers" => excluded_members: list String,
        "DBClusterEndpointArn" => db_cluster_endpoint_arn: opt String,
    }
}

message! {
    #[builder(DescribeDbClusterEndpoints)]
    pub struct DescribeDbClusterEndpointsRequest {
        "DBClusterIdentifier" => db_cluster_identifier: opt String,
        "DBClusterEndpointIdentifier" => db_cluster_endpoint_identifier: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeDbClusterEndpointsResponse {
        "Marker" => marker: opt String,
        "DBClusterEndpoints" => db_cluster_endpoints: list DbClusterEndpoint,
    }
}

pageable!(DescribeDbClusterEndpointsResponse, db_cluster_endpoints: DbClusterEndpoint);

message! {
    #[builder(ModifyDbClusterEndpoint)]
    pub struct ModifyDbClusterEndpointRequest {
        "DBClusterEndpointIdentifier" => db_cluster_endpoint_identifier: req String,
        "EndpointType" => endpoint_type: opt String,
        "StaticMembers" => static_members: list String,
        "ExcludedMembers" => excluded_members: list String,
    }
}

message! {
    pub struct ModifyDbClusterEndpointResponse {
        "DBClusterEndpointIdentifier" => db_cluster_endpoint_identifier: opt String,
        "DBClusterIdentifier" => db_cluster_identifier: opt String,
        "DBClusterEndpointResourceIdentifier" => db_cluster_endpoint_resource_identifier: opt String,
        "Endpoint" => endpoint: opt String,
        "Status" => status: opt String,
        "EndpointType" => endpoint_type: opt String,
        "CustomEndpointType" => custom_endpoint_type: opt String,
        "StaticMembers" => static_members: list String,
        "ExcludedMembers" => excluded_members: list String,
        "DBClusterEndpointArn" => db_cluster_endpoint_arn: opt String,
    }
}

message! {
    /// Starts a database activity stream to monitor activity on a cluster.
    #[builder(StartActivityStream)]
    pub struct StartActivityStreamRequest {
        "ResourceArn" => resource_arn: req String,
        /// `sync` or `async`.
        "Mode" => mode: req String,
        "KmsKeyId" => kms_key_id: req String,
        "ApplyImmediately" => apply_immediately: opt bool,
    }
}

message! {
    pub struct StartActivityStreamResponse {
        "KmsKeyId" => kms_key_id: opt String,
        "KinesisStreamName" => kinesis_stream_name: opt String,
        "Status" => status: opt String,
        "Mode" => mode: opt String,
        "ApplyImmediately" => apply_immediately: opt bool,
    }
}

message! {
    #[builder(StopActivityStream)]
    pub struct StopActivityStreamRequest {
        "ResourceArn" => resource_arn: req String,
        "ApplyImmediately" => apply_immediately: opt bool,
    }
}

message! {
    pub struct StopActivityStreamResponse {
        "KmsKeyId" => kms_key_id: opt String,
        "KinesisStreamName" => kinesis_stream_name: opt String,
        "Status" => status: opt String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn db_cluster_members() -> anyhow::Result<()> {
        let input = json!({
            "DBClusterIdentifier": "my-cluster",
            "DBClusterMembers": [
                {"DBInstanceIdentifier": "writer", "IsClusterWriter": true, "PromotionTier": 1},
                {"DBInstanceIdentifier": "reader", "IsClusterWriter": false},
            ],
            "BacktrackWindow": 86400,
        });
        let cluster = serde_json::from_value::<DbCluster>(input.clone())?;
        assert_eq!(cluster.db_cluster_members.len(), 2);
        assert_eq!(cluster.db_cluster_members[0].is_cluster_writer, Some(true));
        assert_eq!(cluster.backtrack_window, Some(86400));
        assert_eq!(serde_json::to_value(&cluster)?, input);
        Ok(())
    }

    #[test]
    fn scaling_configuration() -> anyhow::Result<()> {
        let request = CreateDbClusterRequest::new()
            .set_db_cluster_identifier("serverless")
            .set_engine("aurora-postgresql")
            .set_engine_mode("serverless")
            .set_scaling_configuration(
                ScalingConfiguration::new()
                    .set_min_capacity(2)
                    .set_max_capacity(16)
                    .set_auto_pause(true),
            );
        let got = serde_json::to_value(&request)?;
        let want = json!({
            "DBClusterIdentifier": "serverless",
            "Engine": "aurora-postgresql",
            "EngineMode": "serverless",
            "ScalingConfiguration": {"MinCapacity": 2, "MaxCapacity": 16, "AutoPause": true},
        });
        assert_eq!(got, want);
        Ok(())
    }
}
