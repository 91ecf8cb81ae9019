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

//! Aurora global databases, clusters replicated across regions.

use super::*;

message! {
    pub struct GlobalCluster {
        "GlobalClusterIdentifier" => global_cluster_identifier: opt String,
        "GlobalClusterResourceId" => global_cluster_resource_id: opt String,
        "GlobalClusterArn" => global_cluster_arn: opt String,
        "Status" => status: opt String,
        "Engine" => engine: opt String,
        "EngineVersion" => engine_version: opt String,
        "DatabaseName" => database_name: opt String,
        "StorageEncrypted" => storage_encrypted: opt bool,
        "DeletionProtection" => deletion_protection: opt bool,
        "GlobalClusterMembers" => global_cluster_members: list GlobalClusterMember,
    }
}

message! {
    /// A cluster that is part of a global database.
    pub struct GlobalClusterMember {
        "DBClusterArn" => db_cluster_arn: opt String,
        /// The ARNs of the secondary clusters.
        "Readers" => readers: list String,
        "IsWriter" => is_writer: opt bool,
        "GlobalWriteForwardingStatus" => global_write_forwarding_status: opt String,
    }
}

message! {
    /// Creates a global database, optionally seeded from an existing cluster.
    #[builder(CreateGlobalCluster)]
    pub struct CreateGlobalClusterRequest {
        "GlobalClusterIdentifier" => global_cluster_identifier: opt String,
        "SourceDBClusterIdentifier" => source_db_cluster_identifier: opt String,
        "Engine" => engine: opt String,
        "EngineVersion" => engine_version: opt String,
        "DeletionProtection" => deletion_protection: opt bool,
        "DatabaseName" => database_name: opt String,
        "StorageEncrypted" => storage_encrypted: opt bool,
    }
}

message! {
    pub struct CreateGlobalClusterResponse {
        "GlobalCluster" => global_cluster: opt GlobalCluster,
    }
}

message! {
    #[builder(DeleteGlobalCluster)]
    pub struct DeleteGlobalClusterRequest {
        "GlobalClusterIdentifier" => global_cluster_identifier: req String,
    }
}

message! {
    pub struct DeleteGlobalClusterResponse {
        "GlobalCluster" => global_cluster: opt GlobalCluster,
    }
}

message! {
    #[builder(DescribeGlobalClusters)]
    pub struct DescribeGlobalClustersRequest {
        "GlobalClusterIdentifier" => global_cluster_identifier: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeGlobalClustersResponse {
        "Marker" => marker: opt String,
        "GlobalClusters" => global_clusters: list GlobalCluster,
    }
}

pageable!(DescribeGlobalClustersResponse, global_clusters: GlobalCluster);

message! {
    #[builder(ModifyGlobalCluster)]
    pub struct ModifyGlobalClusterRequest {
        "GlobalClusterIdentifier" => global_cluster_identifier: opt String,
        "NewGlobalClusterIdentifier" => new_global_cluster_identifier: opt String,
        "DeletionProtection" => deletion_protection: opt bool,
    }
}

message! {
    pub struct ModifyGlobalClusterResponse {
        "GlobalCluster" => global_cluster: opt GlobalCluster,
    }
}

message! {
    /// Detaches a secondary cluster from a global database.
    ///
    /// The cluster becomes a standalone cluster with read-write capability.
    #[builder(RemoveFromGlobalCluster)]
    pub struct RemoveFromGlobalClusterRequest {
        "GlobalClusterIdentifier" => global_cluster_identifier: opt String,
        /// The ARN of the cluster to detach.
        "DbClusterIdentifier" => db_cluster_identifier: opt String,
    }
}

message! {
    pub struct RemoveFromGlobalClusterResponse {
        "GlobalCluster" => global_cluster: opt GlobalCluster,
    }
}
