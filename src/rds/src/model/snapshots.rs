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

use super::*;

message! {
    /// A snapshot of a database instance.
    pub struct DbSnapshot {
        "DBSnapshotIdentifier" => db_snapshot_identifier: opt String,
        "DBInstanceIdentifier" => db_instance_identifier: opt String,
        "SnapshotCreateTime" => snapshot_create_time: opt Timestamp,
        "Engine" => engine: opt String,
        "AllocatedStorage" => allocated_storage: opt i32,
        "Status" => status: opt String,
        "Port" => port: opt i32,
        "AvailabilityZone" => availability_zone: opt String,
        "VpcId" => vpc_id: opt String,
        "InstanceCreateTime" => instance_create_time: opt Timestamp,
        "MasterUsername" => master_username: opt String,
        "EngineVersion" => engine_version: opt String,
        "LicenseModel" => license_model: opt String,
        /// `automated`, `manual`, `shared`, `public`, or `awsbackup`.
        "SnapshotType" => snapshot_type: opt String,
        "Iops" => iops: opt i32,
        "OptionGroupName" => option_group_name: opt String,
        "PercentProgress" => percent_progress: opt i32,
        /// The region this snapshot was copied from, if any.
        "SourceRegion" => source_region: opt String,
        "SourceDBSnapshotIdentifier" => source_db_snapshot_identifier: opt String,
        "StorageType" => storage_type: opt String,
        "TdeCredentialArn" => tde_credential_arn: opt String,
        "Encrypted" => encrypted: opt bool,
        "KmsKeyId" => kms_key_id: opt String,
        "DBSnapshotArn" => db_snapshot_arn: opt String,
        "Timezone" => timezone: opt String,
        "IAMDatabaseAuthenticationEnabled" => iam_database_authentication_enabled: opt bool,
        "ProcessorFeatures" => processor_features: list ProcessorFeature,
        "DbiResourceId" => dbi_resource_id: opt String,
    }
}

message! {
    /// A snapshot of an Aurora cluster.
    pub struct DbClusterSnapshot {
        "AvailabilityZones" => availability_zones: list String,
        "DBClusterSnapshotIdentifier" => db_cluster_snapshot_identifier: opt String,
        "DBClusterIdentifier" => db_cluster_identifier: opt String,
        "SnapshotCreateTime" => snapshot_create_time: opt Timestamp,
        "Engine" => engine: opt String,
        "AllocatedStorage" => allocated_storage: opt i32,
        "Status" => status: opt String,
        "Port" => port: opt i32,
        "VpcId" => vpc_id: opt String,
        "ClusterCreateTime" => cluster_create_time: opt Timestamp,
        "MasterUsername" => master_username: opt String,
        "EngineVersion" => engine_version: opt String,
        "LicenseModel" => license_model: opt String,
        "SnapshotType" => snapshot_type: opt String,
        "PercentProgress" => percent_progress: opt i32,
        "StorageEncrypted" => storage_encrypted: opt bool,
        "KmsKeyId" => kms_key_id: opt String,
        "DBClusterSnapshotArn" => db_cluster_snapshot_arn: opt String,
        "SourceDBClusterSnapshotArn" => source_db_cluster_snapshot_arn: opt String,
        "IAMDatabaseAuthenticationEnabled" => iam_database_authentication_enabled: opt bool,
    }
}

message! {
    #[builder(CreateDbSnapshot)]
    pub struct CreateDbSnapshotRequest {
        "DBSnapshotIdentifier" => db_snapshot_identifier: req String,
        "DBInstanceIdentifier" => db_instance_identifier: req String,
        "Tags" => tags: list Tag,
    }
}

message! {
    pub struct CreateDbSnapshotResponse {
        "DBSnapshot" => db_snapshot: opt DbSnapshot,
    }
}

message! {
    /// Copies a snapshot, possibly from a different region.
    #[builder(CopyDbSnapshot)]
    pub struct CopyDbSnapshotRequest {
        /// The identifier of the source snapshot. Use the ARN for snapshots
        /// in other regions or shared from other accounts.
        "SourceDBSnapshotIdentifier" => source_db_snapshot_identifier: req String,
        "TargetDBSnapshotIdentifier" => target_db_snapshot_identifier: req String,
        "KmsKeyId" => kms_key_id: opt String,
        "Tags" => tags: list Tag,
        "CopyTags" => copy_tags: opt bool,
        "PreSignedUrl" => pre_signed_url: secret String,
        "OptionGroupName" => option_group_name: opt String,
    }
}

message! {
    pub struct CopyDbSnapshotResponse {
        "DBSnapshot" => db_snapshot: opt DbSnapshot,
    }
}

message! {
    #[builder(DeleteDbSnapshot)]
    pub struct DeleteDbSnapshotRequest {
        "DBSnapshotIdentifier" => db_snapshot_identifier: req String,
    }
}

message! {
    pub struct DeleteDbSnapshotResponse {
        "DBSnapshot" => db_snapshot: opt DbSnapshot,
    }
}

message! {
    #[builder(DescribeDbSnapshots)]
    pub struct DescribeDbSnapshotsRequest {
        "DBInstanceIdentifier" => db_instance_identifier: opt String,
        "DBSnapshotIdentifier" => db_snapshot_identifier: opt String,
        "SnapshotType" => snapshot_type: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
        /// Include manual snapshots shared by other accounts.
        "IncludeShared" => include_shared: opt bool,
        "IncludePublic" => include_public: opt bool,
        "DbiResourceId" => dbi_resource_id: opt String,
    }
}

message! {
    pub struct DescribeDbSnapshotsResponse {
        "Marker" => marker: opt String,
        "DBSnapshots" => db_snapshots: list DbSnapshot,
    }
}

pageable!(DescribeDbSnapshotsResponse, db_snapshots: DbSnapshot);

message! {
    /// Upgrades the engine version of a snapshot, or changes its option
    /// group.
    #[builder(ModifyDbSnapshot)]
    pub struct ModifyDbSnapshotRequest {
        "DBSnapshotIdentifier" => db_snapshot_identifier: req String,
        "EngineVersion" => engine_version: opt String,
        "OptionGroupName" => option_group_name: opt String,
    }
}

message! {
    pub struct ModifyDbSnapshotResponse {
        "DBSnapshot" => db_snapshot: opt DbSnapshot,
    }
}

message! {
    /// A snapshot attribute, such as the accounts allowed to restore it.
    pub struct DbSnapshotAttribute {
        /// Currently only `restore` is supported.
        "AttributeName" => attribute_name: opt String,
        "AttributeValues" => attribute_values: list String,
    }
}

message! {
    pub struct DbSnapshotAttributesResult {
        "DBSnapshotIdentifier" => db_snapshot_identifier: opt String,
        "DBSnapshotAttributes" => db_snapshot_attributes: list DbSnapshotAttribute,
    }
}

message! {
    #[builder(DescribeDbSnapshotAttributes)]
    pub struct DescribeDbSnapshotAttributesRequest {
        "DBSnapshotIdentifier" => db_snapshot_identifier: req String,
    }
}

message! {
    pub struct DescribeDbSnapshotAttributesResponse {
        "DBSnapshotAttributesResult" => db_snapshot_attributes_result: opt DbSnapshotAttributesResult,
    }
}

message! {
    /// Shares (or stops sharing) a manual snapshot with other accounts.
    ///
    /// # Example
    /// ```
    /// # use rds_admin::model::ModifyDbSnapshotAttributeRequest;
    /// let request = ModifyDbSnapshotAttributeRequest::new()
    ///     .set_db_snapshot_identifier("my-snapshot")
    ///     .set_attribute_name("restore")
    ///     .set_values_to_add(["123456789012"]);
    /// ```
    #[builder(ModifyDbSnapshotAttribute)]
    pub struct ModifyDbSnapshotAttributeRequest {
        "DBSnapshotIdentifier" => db_snapshot_identifier: req String,
        "AttributeName" => attribute_name: req String,
        /// Account ids, or `all` to make the snapshot public.
        "ValuesToAdd" => values_to_add: list String,
        "ValuesToRemove" => values_to_remove: list String,
    }
}

message! {
    pub struct ModifyDbSnapshotAttributeResponse {
        "DBSnapshotAttributesResult" => db_snapshot_attributes_result: opt DbSnapshotAttributesResult,
    }
}

message! {
    #[builder(CreateDbClusterSnapshot)]
    pub struct CreateDbClusterSnapshotRequest {
        "DBClusterSnapshotIdentifier" => db_cluster_snapshot_identifier: req String,
        "DBClusterIdentifier" => db_cluster_identifier: req String,
        "Tags" => tags: list Tag,
    }
}

message! {
    pub struct CreateDbClusterSnapshotResponse {
        "DBClusterSnapshot" => db_cluster_snapshot: opt DbClusterSnapshot,
    }
}

message! {
    #[builder(CopyDbClusterSnapshot)]
    pub struct CopyDbClusterSnapshotRequest {
        "SourceDBClusterSnapshotIdentifier" => source_db_cluster_snapshot_identifier: req String,
        "TargetDBClusterSnapshotIdentifier" => target_db_cluster_snapshot_identifier: req String,
        "KmsKeyId" => kms_key_id: opt String,
        "PreSignedUrl" => pre_signed_url: secret String,
        "CopyTags" => copy_tags: opt bool,
        "Tags" => tags: list Tag,
    }
}

message! {
    pub struct CopyDbClusterSnapshotResponse {
        "DBClusterSnapshot" => db_cluster_snapshot: opt DbClusterSnapshot,
    }
}

message! {
    #[builder(DeleteDbClusterSnapshot)]
    pub struct DeleteDbClusterSnapshotRequest {
        "DBClusterSnapshotIdentifier" => db_cluster_snapshot_identifier: req String,
    }
}

message! {
    pub struct DeleteDbClusterSnapshotResponse {
        "DBClusterSnapshot" => db_cluster_snapshot: opt DbClusterSnapshot,
    }
}

message! {
    #[builder(DescribeDbClusterSnapshots)]
    pub struct DescribeDbClusterSnapshotsRequest {
        "DBClusterIdentifier" => db_cluster_identifier: opt String,
        "DBClusterSnapshotIdentifier" => db_cluster_snapshot_identifier: opt String,
        "SnapshotType" => snapshot_type: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
        "IncludeShared" => include_shared: opt bool,
        "IncludePublic" => include_public: opt bool,
    }
}

message! {
    pub struct DescribeDbClusterSnapshotsResponse {
        "Marker" => marker: opt String,
        "DBClusterSnapshots" => db_cluster_snapshots: list DbClusterSnapshot,
    }
}

pageable!(DescribeDbClusterSnapshotsResponse, db_cluster_snapshots: DbClusterSnapshot);

message! {
    pub struct DbClusterSnapshotAttribute {
        "AttributeName" => attribute_name: opt String,
        "AttributeValues" => attribute_values: list String,
    }
}

message! {
    pub struct DbClusterSnapshotAttributesResult {
        "DBClusterSnapshotIdentifier" => db_cluster_snapshot_identifier: opt String,
        "DBClusterSnapshotAttributes" => db_cluster_snapshot_attributes: list DbClusterSnapshotAttribute,
    }
}

message! {
    #[builder(DescribeDbClusterSnapshotAttributes)]
    pub struct DescribeDbClusterSnapshotAttributesRequest {
        "DBClusterSnapshotIdentifier" => db_cluster_snapshot_identifier: req String,
    }
}

message! {
    pub struct DescribeDbClusterSnapshotAttributesResponse {
        "DBClusterSnapshotAttributesResult" => db_cluster_snapshot_attributes_result: opt DbClusterSnapshotAttributesResult,
    }
}

message! {
    #[builder(ModifyDbClusterSnapshotAttribute)]
    pub struct ModifyDbClusterSnapshotAttributeRequest {
        "DBClusterSnapshotIdentifier" => db_cluster_snapshot_identifier: req String,
        "AttributeName" => attribute_name: req String,
        "ValuesToAdd" => values_to_add: list String,
        "ValuesToRemove" => values_to_remove: list String,
    }
}

message! {
    pub struct ModifyDbClusterSnapshotAttributeResponse {
        "DBClusterSnapshotAttributesResult" => db_cluster_snapshot_attributes_result: opt DbClusterSnapshotAttributesResult,
    }
}
