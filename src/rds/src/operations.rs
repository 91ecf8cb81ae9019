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

//! The operations offered by the service.
//!
//! Each request type implements [RdsRequest], which names the operation it
//! belongs to and the type returned on success. The operation lists the
//! error conditions the service declares for it.
//!
//! ```
//! # use rds_admin::errors::ErrorKind;
//! use rds_admin::model::DeleteDbInstanceRequest;
//! use rds_admin::operations::RdsRequest;
//! let operation = DeleteDbInstanceRequest::OPERATION;
//! assert_eq!(operation.name(), "DeleteDBInstance");
//! assert!(operation.declares(ErrorKind::DbInstanceNotFound));
//! ```

use crate::errors::ErrorKind;
use crate::model::*;

// Invokes `$callback!` with the definition of every operation.
//
// Each entry is the name of the request builder, followed by:
// - `name`: the operation name used on the wire.
// - `method`: the name of the client and stub functions.
// - `request` and `response`: the model types, `()` if the service returns
//   no data.
// - `errors`: the error conditions declared by the operation.
// - `paginated`: whether the response carries a `Marker` for the next page.
macro_rules! rds_operations {
    ($callback:ident) => {
        $callback! {
            AddRoleToDbCluster {
                name: "AddRoleToDBCluster",
                method: add_role_to_db_cluster,
                request: AddRoleToDbClusterRequest,
                response: (),
                errors: [
                    DbClusterNotFound,
                    DbClusterRoleAlreadyExists,
                    InvalidDbClusterState,
                    DbClusterRoleQuotaExceeded,
                ],
                paginated: false,
            },
            AddRoleToDbInstance {
                name: "AddRoleToDBInstance",
                method: add_role_to_db_instance,
                request: AddRoleToDbInstanceRequest,
                response: (),
                errors: [
                    DbInstanceNotFound,
                    DbInstanceRoleAlreadyExists,
                    InvalidDbInstanceState,
                    DbInstanceRoleQuotaExceeded,
                ],
                paginated: false,
            },
            AddSourceIdentifierToSubscription {
                name: "AddSourceIdentifierToSubscription",
                method: add_source_identifier_to_subscription,
                request: AddSourceIdentifierToSubscriptionRequest,
                response: AddSourceIdentifierToSubscriptionResponse,
                errors: [SubscriptionNotFound, SourceNotFound],
                paginated: false,
            },
            AddTagsToResource {
                name: "AddTagsToResource",
                method: add_tags_to_resource,
                request: AddTagsToResourceRequest,
                response: (),
                errors: [
                    DbInstanceNotFound,
                    DbClusterNotFound,
                    DbSnapshotNotFound,
                    DbProxyNotFound,
                    DbProxyTargetGroupNotFound,
                ],
                paginated: false,
            },
            ApplyPendingMaintenanceAction {
                name: "ApplyPendingMaintenanceAction",
                method: apply_pending_maintenance_action,
                request: ApplyPendingMaintenanceActionRequest,
                response: ApplyPendingMaintenanceActionResponse,
                errors: [ResourceNotFound, InvalidDbClusterState, InvalidDbInstanceState],
                paginated: false,
            },
            AuthorizeDbSecurityGroupIngress {
                name: "AuthorizeDBSecurityGroupIngress",
                method: authorize_db_security_group_ingress,
                request: AuthorizeDbSecurityGroupIngressRequest,
                response: AuthorizeDbSecurityGroupIngressResponse,
                errors: [
                    DbSecurityGroupNotFound,
                    InvalidDbSecurityGroupState,
                    AuthorizationAlreadyExists,
                    AuthorizationQuotaExceeded,
                ],
                paginated: false,
            },
            BacktrackDbCluster {
                name: "BacktrackDBCluster",
                method: backtrack_db_cluster,
                request: BacktrackDbClusterRequest,
                response: BacktrackDbClusterResponse,
                errors: [DbClusterNotFound, InvalidDbClusterState],
                paginated: false,
            },
            CancelExportTask {
                name: "CancelExportTask",
                method: cancel_export_task,
                request: CancelExportTaskRequest,
                response: CancelExportTaskResponse,
                errors: [ExportTaskNotFound, InvalidExportTaskState],
                paginated: false,
            },
            CopyDbClusterParameterGroup {
                name: "CopyDBClusterParameterGroup",
                method: copy_db_cluster_parameter_group,
                request: CopyDbClusterParameterGroupRequest,
                response: CopyDbClusterParameterGroupResponse,
                errors: [
                    DbParameterGroupNotFound,
                    DbParameterGroupQuotaExceeded,
                    DbParameterGroupAlreadyExists,
                ],
                paginated: false,
            },
            CopyDbClusterSnapshot {
                name: "CopyDBClusterSnapshot",
                method: copy_db_cluster_snapshot,
                request: CopyDbClusterSnapshotRequest,
                response: CopyDbClusterSnapshotResponse,
                errors: [
                    DbClusterSnapshotAlreadyExists,
                    DbClusterSnapshotNotFound,
                    InvalidDbClusterState,
                    InvalidDbClusterSnapshotState,
                    SnapshotQuotaExceeded,
                    KmsKeyNotAccessible,
                ],
                paginated: false,
            },
            CopyDbParameterGroup {
                name: "CopyDBParameterGroup",
                method: copy_db_parameter_group,
                request: CopyDbParameterGroupRequest,
                response: CopyDbParameterGroupResponse,
                errors: [
                    DbParameterGroupNotFound,
                    DbParameterGroupAlreadyExists,
                    DbParameterGroupQuotaExceeded,
                ],
                paginated: false,
            },
            CopyDbSnapshot {
                name: "CopyDBSnapshot",
                method: copy_db_snapshot,
                request: CopyDbSnapshotRequest,
                response: CopyDbSnapshotResponse,
                errors: [
                    DbSnapshotAlreadyExists,
                    DbSnapshotNotFound,
                    InvalidDbSnapshotState,
                    SnapshotQuotaExceeded,
                    KmsKeyNotAccessible,
                ],
                paginated: false,
            },
            CopyOptionGroup {
                name: "CopyOptionGroup",
                method: copy_option_group,
                request: CopyOptionGroupRequest,
                response: CopyOptionGroupResponse,
                errors: [OptionGroupAlreadyExists, OptionGroupNotFound, OptionGroupQuotaExceeded],
                paginated: false,
            },
            CreateCustomAvailabilityZone {
                name: "CreateCustomAvailabilityZone",
                method: create_custom_availability_zone,
                request: CreateCustomAvailabilityZoneRequest,
                response: CreateCustomAvailabilityZoneResponse,
                errors: [
                    CustomAvailabilityZoneAlreadyExists,
                    CustomAvailabilityZoneQuotaExceeded,
                    KmsKeyNotAccessible,
                ],
                paginated: false,
            },
            CreateDbCluster {
                name: "CreateDBCluster",
                method: create_db_cluster,
                request: CreateDbClusterRequest,
                response: CreateDbClusterResponse,
                errors: [
                    DbClusterAlreadyExists,
                    InsufficientStorageClusterCapacity,
                    DbClusterQuotaExceeded,
                    StorageQuotaExceeded,
                    DbSubnetGroupNotFound,
                    InvalidVpcNetworkState,
                    InvalidDbClusterState,
                    InvalidDbSubnetGroupState,
                    InvalidSubnet,
                    InvalidDbInstanceState,
                    DbClusterParameterGroupNotFound,
                    KmsKeyNotAccessible,
                    DbClusterNotFound,
                    DbInstanceNotFound,
                    DbSubnetGroupDoesNotCoverEnoughAzs,
                    GlobalClusterNotFound,
                    InvalidGlobalClusterState,
                    DomainNotFound,
                ],
                paginated: false,
            },
            CreateDbClusterEndpoint {
                name: "CreateDBClusterEndpoint",
                method: create_db_cluster_endpoint,
                request: CreateDbClusterEndpointRequest,
                response: CreateDbClusterEndpointResponse,
                errors: [
                    DbClusterEndpointQuotaExceeded,
                    DbClusterEndpointAlreadyExists,
                    DbClusterNotFound,
                    InvalidDbClusterState,
                    DbInstanceNotFound,
                    InvalidDbInstanceState,
                ],
                paginated: false,
            },
            CreateDbClusterParameterGroup {
                name: "CreateDBClusterParameterGroup",
                method: create_db_cluster_parameter_group,
                request: CreateDbClusterParameterGroupRequest,
                response: CreateDbClusterParameterGroupResponse,
                errors: [DbParameterGroupQuotaExceeded, DbParameterGroupAlreadyExists],
                paginated: false,
            },
            CreateDbClusterSnapshot {
                name: "CreateDBClusterSnapshot",
                method: create_db_cluster_snapshot,
                request: CreateDbClusterSnapshotRequest,
                response: CreateDbClusterSnapshotResponse,
                errors: [
                    DbClusterSnapshotAlreadyExists,
                    InvalidDbClusterState,
                    DbClusterNotFound,
                    SnapshotQuotaExceeded,
                    InvalidDbClusterSnapshotState,
                ],
                paginated: false,
            },
            CreateDbInstance {
                name: "CreateDBInstance",
                method: create_db_instance,
                request: CreateDbInstanceRequest,
                response: CreateDbInstanceResponse,
                errors: [
                    DbInstanceAlreadyExists,
                    InsufficientDbInstanceCapacity,
                    DbParameterGroupNotFound,
                    DbSecurityGroupNotFound,
                    InstanceQuotaExceeded,
                    StorageQuotaExceeded,
                    DbSubnetGroupNotFound,
                    DbSubnetGroupDoesNotCoverEnoughAzs,
                    InvalidDbClusterState,
                    InvalidSubnet,
                    InvalidVpcNetworkState,
                    ProvisionedIopsNotAvailableInAz,
                    OptionGroupNotFound,
                    DbClusterNotFound,
                    StorageTypeNotSupported,
                    AuthorizationNotFound,
                    KmsKeyNotAccessible,
                    DomainNotFound,
                    BackupPolicyNotFound,
                ],
                paginated: false,
            },
            CreateDbInstanceReadReplica {
                name: "CreateDBInstanceReadReplica",
                method: create_db_instance_read_replica,
                request: CreateDbInstanceReadReplicaRequest,
                response: CreateDbInstanceReadReplicaResponse,
                errors: [
                    DbInstanceAlreadyExists,
                    InsufficientDbInstanceCapacity,
                    DbParameterGroupNotFound,
                    DbSecurityGroupNotFound,
                    InstanceQuotaExceeded,
                    StorageQuotaExceeded,
                    DbInstanceNotFound,
                    InvalidDbInstanceState,
                    DbSubnetGroupNotFound,
                    DbSubnetGroupDoesNotCoverEnoughAzs,
                    InvalidSubnet,
                    InvalidVpcNetworkState,
                    ProvisionedIopsNotAvailableInAz,
                    OptionGroupNotFound,
                    DbSubnetGroupNotAllowed,
                    InvalidDbSubnetGroup,
                    StorageTypeNotSupported,
                    KmsKeyNotAccessible,
                    DomainNotFound,
                ],
                paginated: false,
            },
            CreateDbParameterGroup {
                name: "CreateDBParameterGroup",
                method: create_db_parameter_group,
                request: CreateDbParameterGroupRequest,
                response: CreateDbParameterGroupResponse,
                errors: [DbParameterGroupQuotaExceeded, DbParameterGroupAlreadyExists],
                paginated: false,
            },
            CreateDbProxy {
                name: "CreateDBProxy",
                method: create_db_proxy,
                request: CreateDbProxyRequest,
                response: CreateDbProxyResponse,
                errors: [InvalidSubnet, DbProxyAlreadyExists, DbProxyQuotaExceeded],
                paginated: false,
            },
            CreateDbSecurityGroup {
                name: "CreateDBSecurityGroup",
                method: create_db_security_group,
                request: CreateDbSecurityGroupRequest,
                response: CreateDbSecurityGroupResponse,
                errors: [
                    DbSecurityGroupAlreadyExists,
                    DbSecurityGroupQuotaExceeded,
                    DbSecurityGroupNotSupported,
                ],
                paginated: false,
            },
            CreateDbSnapshot {
                name: "CreateDBSnapshot",
                method: create_db_snapshot,
                request: CreateDbSnapshotRequest,
                response: CreateDbSnapshotResponse,
                errors: [
                    DbSnapshotAlreadyExists,
                    InvalidDbInstanceState,
                    DbInstanceNotFound,
                    SnapshotQuotaExceeded,
                ],
                paginated: false,
            },
            CreateDbSubnetGroup {
                name: "CreateDBSubnetGroup",
                method: create_db_subnet_group,
                request: CreateDbSubnetGroupRequest,
                response: CreateDbSubnetGroupResponse,
                errors: [
                    DbSubnetGroupAlreadyExists,
                    DbSubnetGroupQuotaExceeded,
                    DbSubnetQuotaExceeded,
                    DbSubnetGroupDoesNotCoverEnoughAzs,
                    InvalidSubnet,
                ],
                paginated: false,
            },
            CreateEventSubscription {
                name: "CreateEventSubscription",
                method: create_event_subscription,
                request: CreateEventSubscriptionRequest,
                response: CreateEventSubscriptionResponse,
                errors: [
                    EventSubscriptionQuotaExceeded,
                    SubscriptionAlreadyExist,
                    SnsInvalidTopic,
                    SnsNoAuthorization,
                    SnsTopicArnNotFound,
                    SubscriptionCategoryNotFound,
                    SourceNotFound,
                ],
                paginated: false,
            },
            CreateGlobalCluster {
                name: "CreateGlobalCluster",
                method: create_global_cluster,
                request: CreateGlobalClusterRequest,
                response: CreateGlobalClusterResponse,
                errors: [
                    GlobalClusterAlreadyExists,
                    GlobalClusterQuotaExceeded,
                    InvalidDbClusterState,
                    DbClusterNotFound,
                ],
                paginated: false,
            },
            CreateOptionGroup {
                name: "CreateOptionGroup",
                method: create_option_group,
                request: CreateOptionGroupRequest,
                response: CreateOptionGroupResponse,
                errors: [OptionGroupAlreadyExists, OptionGroupQuotaExceeded],
                paginated: false,
            },
            DeleteCustomAvailabilityZone {
                name: "DeleteCustomAvailabilityZone",
                method: delete_custom_availability_zone,
                request: DeleteCustomAvailabilityZoneRequest,
                response: DeleteCustomAvailabilityZoneResponse,
                errors: [CustomAvailabilityZoneNotFound, KmsKeyNotAccessible],
                paginated: false,
            },
            DeleteDbCluster {
                name: "DeleteDBCluster",
                method: delete_db_cluster,
                request: DeleteDbClusterRequest,
                response: DeleteDbClusterResponse,
                errors: [
                    DbClusterNotFound,
                    InvalidDbClusterState,
                    DbClusterSnapshotAlreadyExists,
                    SnapshotQuotaExceeded,
                    InvalidDbClusterSnapshotState,
                ],
                paginated: false,
            },
            DeleteDbClusterEndpoint {
                name: "DeleteDBClusterEndpoint",
                method: delete_db_cluster_endpoint,
                request: DeleteDbClusterEndpointRequest,
                response: DeleteDbClusterEndpointResponse,
                errors: [
                    InvalidDbClusterEndpointState,
                    DbClusterEndpointNotFound,
                    InvalidDbClusterState,
                ],
                paginated: false,
            },
            DeleteDbClusterParameterGroup {
                name: "DeleteDBClusterParameterGroup",
                method: delete_db_cluster_parameter_group,
                request: DeleteDbClusterParameterGroupRequest,
                response: (),
                errors: [InvalidDbParameterGroupState, DbParameterGroupNotFound],
                paginated: false,
            },
            DeleteDbClusterSnapshot {
                name: "DeleteDBClusterSnapshot",
                method: delete_db_cluster_snapshot,
                request: DeleteDbClusterSnapshotRequest,
                response: DeleteDbClusterSnapshotResponse,
                errors: [InvalidDbClusterSnapshotState, DbClusterSnapshotNotFound],
                paginated: false,
            },
            DeleteDbInstance {
                name: "DeleteDBInstance",
                method: delete_db_instance,
                request: DeleteDbInstanceRequest,
                response: DeleteDbInstanceResponse,
                errors: [
                    DbInstanceNotFound,
                    InvalidDbInstanceState,
                    DbSnapshotAlreadyExists,
                    SnapshotQuotaExceeded,
                    InvalidDbClusterState,
                    DbInstanceAutomatedBackupQuotaExceeded,
                ],
                paginated: false,
            },
            DeleteDbInstanceAutomatedBackup {
                name: "DeleteDBInstanceAutomatedBackup",
                method: delete_db_instance_automated_backup,
                request: DeleteDbInstanceAutomatedBackupRequest,
                response: DeleteDbInstanceAutomatedBackupResponse,
                errors: [InvalidDbInstanceAutomatedBackupState, DbInstanceAutomatedBackupNotFound],
                paginated: false,
            },
            DeleteDbParameterGroup {
                name: "DeleteDBParameterGroup",
                method: delete_db_parameter_group,
                request: DeleteDbParameterGroupRequest,
                response: (),
                errors: [InvalidDbParameterGroupState, DbParameterGroupNotFound],
                paginated: false,
            },
            DeleteDbProxy {
                name: "DeleteDBProxy",
                method: delete_db_proxy,
                request: DeleteDbProxyRequest,
                response: DeleteDbProxyResponse,
                errors: [DbProxyNotFound, InvalidDbProxyState],
                paginated: false,
            },
            DeleteDbSecurityGroup {
                name: "DeleteDBSecurityGroup",
                method: delete_db_security_group,
                request: DeleteDbSecurityGroupRequest,
                response: (),
                errors: [InvalidDbSecurityGroupState, DbSecurityGroupNotFound],
                paginated: false,
            },
            DeleteDbSnapshot {
                name: "DeleteDBSnapshot",
                method: delete_db_snapshot,
                request: DeleteDbSnapshotRequest,
                response: DeleteDbSnapshotResponse,
                errors: [InvalidDbSnapshotState, DbSnapshotNotFound],
                paginated: false,
            },
            DeleteDbSubnetGroup {
                name: "DeleteDBSubnetGroup",
                method: delete_db_subnet_group,
                request: DeleteDbSubnetGroupRequest,
                response: (),
                errors: [InvalidDbSubnetGroupState, InvalidDbSubnetState, DbSubnetGroupNotFound],
                paginated: false,
            },
            DeleteEventSubscription {
                name: "DeleteEventSubscription",
                method: delete_event_subscription,
                request: DeleteEventSubscriptionRequest,
                response: DeleteEventSubscriptionResponse,
                errors: [SubscriptionNotFound, InvalidEventSubscriptionState],
                paginated: false,
            },
            DeleteGlobalCluster {
                name: "DeleteGlobalCluster",
                method: delete_global_cluster,
                request: DeleteGlobalClusterRequest,
                response: DeleteGlobalClusterResponse,
                errors: [GlobalClusterNotFound, InvalidGlobalClusterState],
                paginated: false,
            },
            DeleteInstallationMedia {
                name: "DeleteInstallationMedia",
                method: delete_installation_media,
                request: DeleteInstallationMediaRequest,
                response: DeleteInstallationMediaResponse,
                errors: [InstallationMediaNotFound],
                paginated: false,
            },
            DeleteOptionGroup {
                name: "DeleteOptionGroup",
                method: delete_option_group,
                request: DeleteOptionGroupRequest,
                response: (),
                errors: [OptionGroupNotFound, InvalidOptionGroupState],
                paginated: false,
            },
            DeregisterDbProxyTargets {
                name: "DeregisterDBProxyTargets",
                method: deregister_db_proxy_targets,
                request: DeregisterDbProxyTargetsRequest,
                response: DeregisterDbProxyTargetsResponse,
                errors: [
                    DbProxyTargetNotFound,
                    DbProxyTargetGroupNotFound,
                    DbProxyNotFound,
                    InvalidDbProxyState,
                ],
                paginated: false,
            },
            DescribeAccountAttributes {
                name: "DescribeAccountAttributes",
                method: describe_account_attributes,
                request: DescribeAccountAttributesRequest,
                response: DescribeAccountAttributesResponse,
                errors: [],
                paginated: false,
            },
            DescribeCertificates {
                name: "DescribeCertificates",
                method: describe_certificates,
                request: DescribeCertificatesRequest,
                response: DescribeCertificatesResponse,
                errors: [CertificateNotFound],
                paginated: true,
            },
            DescribeCustomAvailabilityZones {
                name: "DescribeCustomAvailabilityZones",
                method: describe_custom_availability_zones,
                request: DescribeCustomAvailabilityZonesRequest,
                response: DescribeCustomAvailabilityZonesResponse,
                errors: [CustomAvailabilityZoneNotFound],
                paginated: true,
            },
            DescribeDbClusterBacktracks {
                name: "DescribeDBClusterBacktracks",
                method: describe_db_cluster_backtracks,
                request: DescribeDbClusterBacktracksRequest,
                response: DescribeDbClusterBacktracksResponse,
                errors: [DbClusterNotFound, DbClusterBacktrackNotFound],
                paginated: true,
            },
            DescribeDbClusterEndpoints {
                name: "DescribeDBClusterEndpoints",
                method: describe_db_cluster_endpoints,
                request: DescribeDbClusterEndpointsRequest,
                response: DescribeDbClusterEndpointsResponse,
                errors: [DbClusterNotFound],
                paginated: true,
            },
            DescribeDbClusterParameterGroups {
                name: "DescribeDBClusterParameterGroups",
                method: describe_db_cluster_parameter_groups,
                request: DescribeDbClusterParameterGroupsRequest,
                response: DescribeDbClusterParameterGroupsResponse,
                errors: [DbParameterGroupNotFound],
                paginated: true,
            },
            DescribeDbClusterParameters {
                name: "DescribeDBClusterParameters",
                method: describe_db_cluster_parameters,
                request: DescribeDbClusterParametersRequest,
                response: DescribeDbClusterParametersResponse,
                errors: [DbParameterGroupNotFound],
                paginated: true,
            },
            DescribeDbClusterSnapshotAttributes {
                name: "DescribeDBClusterSnapshotAttributes",
                method: describe_db_cluster_snapshot_attributes,
                request: DescribeDbClusterSnapshotAttributesRequest,
                response: DescribeDbClusterSnapshotAttributesResponse,
                errors: [DbClusterSnapshotNotFound],
                paginated: false,
            },
            DescribeDbClusterSnapshots {
                name: "DescribeDBClusterSnapshots",
                method: describe_db_cluster_snapshots,
                request: DescribeDbClusterSnapshotsRequest,
                response: DescribeDbClusterSnapshotsResponse,
                errors: [DbClusterSnapshotNotFound],
                paginated: true,
            },
            DescribeDbClusters {
                name: "DescribeDBClusters",
                method: describe_db_clusters,
                request: DescribeDbClustersRequest,
                response: DescribeDbClustersResponse,
                errors: [DbClusterNotFound],
                paginated: true,
            },
            DescribeDbEngineVersions {
                name: "DescribeDBEngineVersions",
                method: describe_db_engine_versions,
                request: DescribeDbEngineVersionsRequest,
                response: DescribeDbEngineVersionsResponse,
                errors: [],
                paginated: true,
            },
            DescribeDbInstanceAutomatedBackups {
                name: "DescribeDBInstanceAutomatedBackups",
                method: describe_db_instance_automated_backups,
                request: DescribeDbInstanceAutomatedBackupsRequest,
                response: DescribeDbInstanceAutomatedBackupsResponse,
                errors: [DbInstanceAutomatedBackupNotFound],
                paginated: true,
            },
            DescribeDbInstances {
                name: "DescribeDBInstances",
                method: describe_db_instances,
                request: DescribeDbInstancesRequest,
                response: DescribeDbInstancesResponse,
                errors: [DbInstanceNotFound],
                paginated: true,
            },
            DescribeDbLogFiles {
                name: "DescribeDBLogFiles",
                method: describe_db_log_files,
                request: DescribeDbLogFilesRequest,
                response: DescribeDbLogFilesResponse,
                errors: [DbInstanceNotFound],
                paginated: true,
            },
            DescribeDbParameterGroups {
                name: "DescribeDBParameterGroups",
                method: describe_db_parameter_groups,
                request: DescribeDbParameterGroupsRequest,
                response: DescribeDbParameterGroupsResponse,
                errors: [DbParameterGroupNotFound],
                paginated: true,
            },
            DescribeDbParameters {
                name: "DescribeDBParameters",
                method: describe_db_parameters,
                request: DescribeDbParametersRequest,
                response: DescribeDbParametersResponse,
                errors: [DbParameterGroupNotFound],
                paginated: true,
            },
            DescribeDbProxies {
                name: "DescribeDBProxies",
                method: describe_db_proxies,
                request: DescribeDbProxiesRequest,
                response: DescribeDbProxiesResponse,
                errors: [DbProxyNotFound],
                paginated: true,
            },
            DescribeDbProxyTargetGroups {
                name: "DescribeDBProxyTargetGroups",
                method: describe_db_proxy_target_groups,
                request: DescribeDbProxyTargetGroupsRequest,
                response: DescribeDbProxyTargetGroupsResponse,
                errors: [DbProxyNotFound, DbProxyTargetGroupNotFound, InvalidDbProxyState],
                paginated: true,
            },
            DescribeDbProxyTargets {
                name: "DescribeDBProxyTargets",
                method: describe_db_proxy_targets,
                request: DescribeDbProxyTargetsRequest,
                response: DescribeDbProxyTargetsResponse,
                errors: [
                    DbProxyNotFound,
                    DbProxyTargetNotFound,
                    DbProxyTargetGroupNotFound,
                    InvalidDbProxyState,
                ],
                paginated: true,
            },
            DescribeDbSecurityGroups {
                name: "DescribeDBSecurityGroups",
                method: describe_db_security_groups,
                request: DescribeDbSecurityGroupsRequest,
                response: DescribeDbSecurityGroupsResponse,
                errors: [DbSecurityGroupNotFound],
                paginated: true,
            },
            DescribeDbSnapshotAttributes {
                name: "DescribeDBSnapshotAttributes",
                method: describe_db_snapshot_attributes,
                request: DescribeDbSnapshotAttributesRequest,
                response: DescribeDbSnapshotAttributesResponse,
                errors: [DbSnapshotNotFound],
                paginated: false,
            },
            DescribeDbSnapshots {
                name: "DescribeDBSnapshots",
                method: describe_db_snapshots,
                request: DescribeDbSnapshotsRequest,
                response: DescribeDbSnapshotsResponse,
                errors: [DbSnapshotNotFound],
                paginated: true,
            },
            DescribeDbSubnetGroups {
                name: "DescribeDBSubnetGroups",
                method: describe_db_subnet_groups,
                request: DescribeDbSubnetGroupsRequest,
                response: DescribeDbSubnetGroupsResponse,
                errors: [DbSubnetGroupNotFound],
                paginated: true,
            },
            DescribeEngineDefaultClusterParameters {
                name: "DescribeEngineDefaultClusterParameters",
                method: describe_engine_default_cluster_parameters,
                request: DescribeEngineDefaultClusterParametersRequest,
                response: DescribeEngineDefaultClusterParametersResponse,
                errors: [],
                paginated: false,
            },
            DescribeEngineDefaultParameters {
                name: "DescribeEngineDefaultParameters",
                method: describe_engine_default_parameters,
                request: DescribeEngineDefaultParametersRequest,
                response: DescribeEngineDefaultParametersResponse,
                errors: [],
                paginated: false,
            },
            DescribeEventCategories {
                name: "DescribeEventCategories",
                method: describe_event_categories,
                request: DescribeEventCategoriesRequest,
                response: DescribeEventCategoriesResponse,
                errors: [],
                paginated: false,
            },
            DescribeEventSubscriptions {
                name: "DescribeEventSubscriptions",
                method: describe_event_subscriptions,
                request: DescribeEventSubscriptionsRequest,
                response: DescribeEventSubscriptionsResponse,
                errors: [SubscriptionNotFound],
                paginated: true,
            },
            DescribeEvents {
                name: "DescribeEvents",
                method: describe_events,
                request: DescribeEventsRequest,
                response: DescribeEventsResponse,
                errors: [],
                paginated: true,
            },
            DescribeExportTasks {
                name: "DescribeExportTasks",
                method: describe_export_tasks,
                request: DescribeExportTasksRequest,
                response: DescribeExportTasksResponse,
                errors: [ExportTaskNotFound],
                paginated: true,
            },
            DescribeGlobalClusters {
                name: "DescribeGlobalClusters",
                method: describe_global_clusters,
                request: DescribeGlobalClustersRequest,
                response: DescribeGlobalClustersResponse,
                errors: [GlobalClusterNotFound],
                paginated: true,
            },
            DescribeInstallationMedia {
                name: "DescribeInstallationMedia",
                method: describe_installation_media,
                request: DescribeInstallationMediaRequest,
                response: DescribeInstallationMediaResponse,
                errors: [InstallationMediaNotFound],
                paginated: true,
            },
            DescribeOptionGroupOptions {
                name: "DescribeOptionGroupOptions",
                method: describe_option_group_options,
                request: DescribeOptionGroupOptionsRequest,
                response: DescribeOptionGroupOptionsResponse,
                errors: [],
                paginated: true,
            },
            DescribeOptionGroups {
                name: "DescribeOptionGroups",
                method: describe_option_groups,
                request: DescribeOptionGroupsRequest,
                response: DescribeOptionGroupsResponse,
                errors: [OptionGroupNotFound],
                paginated: true,
            },
            DescribeOrderableDbInstanceOptions {
                name: "DescribeOrderableDBInstanceOptions",
                method: describe_orderable_db_instance_options,
                request: DescribeOrderableDbInstanceOptionsRequest,
                response: DescribeOrderableDbInstanceOptionsResponse,
                errors: [],
                paginated: true,
            },
            DescribePendingMaintenanceActions {
                name: "DescribePendingMaintenanceActions",
                method: describe_pending_maintenance_actions,
                request: DescribePendingMaintenanceActionsRequest,
                response: DescribePendingMaintenanceActionsResponse,
                errors: [ResourceNotFound],
                paginated: true,
            },
            DescribeReservedDbInstances {
                name: "DescribeReservedDBInstances",
                method: describe_reserved_db_instances,
                request: DescribeReservedDbInstancesRequest,
                response: DescribeReservedDbInstancesResponse,
                errors: [ReservedDbInstanceNotFound],
                paginated: true,
            },
            DescribeReservedDbInstancesOfferings {
                name: "DescribeReservedDBInstancesOfferings",
                method: describe_reserved_db_instances_offerings,
                request: DescribeReservedDbInstancesOfferingsRequest,
                response: DescribeReservedDbInstancesOfferingsResponse,
                errors: [ReservedDbInstancesOfferingNotFound],
                paginated: true,
            },
            DescribeSourceRegions {
                name: "DescribeSourceRegions",
                method: describe_source_regions,
                request: DescribeSourceRegionsRequest,
                response: DescribeSourceRegionsResponse,
                errors: [],
                paginated: true,
            },
            DescribeValidDbInstanceModifications {
                name: "DescribeValidDBInstanceModifications",
                method: describe_valid_db_instance_modifications,
                request: DescribeValidDbInstanceModificationsRequest,
                response: DescribeValidDbInstanceModificationsResponse,
                errors: [DbInstanceNotFound, InvalidDbInstanceState],
                paginated: false,
            },
            DownloadDbLogFilePortion {
                name: "DownloadDBLogFilePortion",
                method: download_db_log_file_portion,
                request: DownloadDbLogFilePortionRequest,
                response: DownloadDbLogFilePortionResponse,
                errors: [DbInstanceNotFound, DbLogFileNotFound],
                paginated: false,
            },
            FailoverDbCluster {
                name: "FailoverDBCluster",
                method: failover_db_cluster,
                request: FailoverDbClusterRequest,
                response: FailoverDbClusterResponse,
                errors: [DbClusterNotFound, InvalidDbClusterState, InvalidDbInstanceState],
                paginated: false,
            },
            ImportInstallationMedia {
                name: "ImportInstallationMedia",
                method: import_installation_media,
                request: ImportInstallationMediaRequest,
                response: ImportInstallationMediaResponse,
                errors: [CustomAvailabilityZoneNotFound, InstallationMediaAlreadyExists],
                paginated: false,
            },
            ListTagsForResource {
                name: "ListTagsForResource",
                method: list_tags_for_resource,
                request: ListTagsForResourceRequest,
                response: ListTagsForResourceResponse,
                errors: [
                    DbInstanceNotFound,
                    DbSnapshotNotFound,
                    DbClusterNotFound,
                    DbProxyNotFound,
                    DbProxyTargetGroupNotFound,
                ],
                paginated: false,
            },
            ModifyCertificates {
                name: "ModifyCertificates",
                method: modify_certificates,
                request: ModifyCertificatesRequest,
                response: ModifyCertificatesResponse,
                errors: [CertificateNotFound],
                paginated: false,
            },
            ModifyCurrentDbClusterCapacity {
                name: "ModifyCurrentDBClusterCapacity",
                method: modify_current_db_cluster_capacity,
                request: ModifyCurrentDbClusterCapacityRequest,
                response: ModifyCurrentDbClusterCapacityResponse,
                errors: [DbClusterNotFound, InvalidDbClusterState, InvalidDbClusterCapacity],
                paginated: false,
            },
            ModifyDbCluster {
                name: "ModifyDBCluster",
                method: modify_db_cluster,
                request: ModifyDbClusterRequest,
                response: ModifyDbClusterResponse,
                errors: [
                    DbClusterNotFound,
                    InvalidDbClusterState,
                    StorageQuotaExceeded,
                    DbSubnetGroupNotFound,
                    InvalidVpcNetworkState,
                    InvalidDbSubnetGroupState,
                    InvalidSubnet,
                    DbClusterParameterGroupNotFound,
                    InvalidDbSecurityGroupState,
                    InvalidDbInstanceState,
                    DbClusterAlreadyExists,
                    DomainNotFound,
                ],
                paginated: false,
            },
            ModifyDbClusterEndpoint {
                name: "ModifyDBClusterEndpoint",
                method: modify_db_cluster_endpoint,
                request: ModifyDbClusterEndpointRequest,
                response: ModifyDbClusterEndpointResponse,
                errors: [
                    InvalidDbClusterState,
                    InvalidDbClusterEndpointState,
                    DbClusterEndpointNotFound,
                    DbInstanceNotFound,
                    InvalidDbInstanceState,
                ],
                paginated: false,
            },
            ModifyDbClusterParameterGroup {
                name: "ModifyDBClusterParameterGroup",
                method: modify_db_cluster_parameter_group,
                request: ModifyDbClusterParameterGroupRequest,
                response: ModifyDbClusterParameterGroupResponse,
                errors: [DbParameterGroupNotFound, InvalidDbParameterGroupState],
                paginated: false,
            },
            ModifyDbClusterSnapshotAttribute {
                name: "ModifyDBClusterSnapshotAttribute",
                method: modify_db_cluster_snapshot_attribute,
                request: ModifyDbClusterSnapshotAttributeRequest,
                response: ModifyDbClusterSnapshotAttributeResponse,
                errors: [
                    DbClusterSnapshotNotFound,
                    InvalidDbClusterSnapshotState,
                    SharedSnapshotQuotaExceeded,
                ],
                paginated: false,
            },
            ModifyDbInstance {
                name: "ModifyDBInstance",
                method: modify_db_instance,
                request: ModifyDbInstanceRequest,
                response: ModifyDbInstanceResponse,
                errors: [
                    InvalidDbInstanceState,
                    InvalidDbSecurityGroupState,
                    DbInstanceAlreadyExists,
                    DbInstanceNotFound,
                    DbSecurityGroupNotFound,
                    DbParameterGroupNotFound,
                    InsufficientDbInstanceCapacity,
                    StorageQuotaExceeded,
                    InvalidVpcNetworkState,
                    ProvisionedIopsNotAvailableInAz,
                    OptionGroupNotFound,
                    DbUpgradeDependencyFailure,
                    StorageTypeNotSupported,
                    AuthorizationNotFound,
                    CertificateNotFound,
                    DomainNotFound,
                    BackupPolicyNotFound,
                ],
                paginated: false,
            },
            ModifyDbParameterGroup {
                name: "ModifyDBParameterGroup",
                method: modify_db_parameter_group,
                request: ModifyDbParameterGroupRequest,
                response: ModifyDbParameterGroupResponse,
                errors: [DbParameterGroupNotFound, InvalidDbParameterGroupState],
                paginated: false,
            },
            ModifyDbProxy {
                name: "ModifyDBProxy",
                method: modify_db_proxy,
                request: ModifyDbProxyRequest,
                response: ModifyDbProxyResponse,
                errors: [DbProxyNotFound, DbProxyAlreadyExists, InvalidDbProxyState],
                paginated: false,
            },
            ModifyDbProxyTargetGroup {
                name: "ModifyDBProxyTargetGroup",
                method: modify_db_proxy_target_group,
                request: ModifyDbProxyTargetGroupRequest,
                response: ModifyDbProxyTargetGroupResponse,
                errors: [DbProxyNotFound, DbProxyTargetGroupNotFound, InvalidDbProxyState],
                paginated: false,
            },
            ModifyDbSnapshot {
                name: "ModifyDBSnapshot",
                method: modify_db_snapshot,
                request: ModifyDbSnapshotRequest,
                response: ModifyDbSnapshotResponse,
                errors: [DbSnapshotNotFound],
                paginated: false,
            },
            ModifyDbSnapshotAttribute {
                name: "ModifyDBSnapshotAttribute",
                method: modify_db_snapshot_attribute,
                request: ModifyDbSnapshotAttributeRequest,
                response: ModifyDbSnapshotAttributeResponse,
                errors: [DbSnapshotNotFound, InvalidDbSnapshotState, SharedSnapshotQuotaExceeded],
                paginated: false,
            },
            ModifyDbSubnetGroup {
                name: "ModifyDBSubnetGroup",
                method: modify_db_subnet_group,
                request: ModifyDbSubnetGroupRequest,
                response: ModifyDbSubnetGroupResponse,
                errors: [
                    DbSubnetGroupNotFound,
                    DbSubnetQuotaExceeded,
                    SubnetAlreadyInUse,
                    DbSubnetGroupDoesNotCoverEnoughAzs,
                    InvalidSubnet,
                ],
                paginated: false,
            },
            ModifyEventSubscription {
                name: "ModifyEventSubscription",
                method: modify_event_subscription,
                request: ModifyEventSubscriptionRequest,
                response: ModifyEventSubscriptionResponse,
                errors: [
                    EventSubscriptionQuotaExceeded,
                    SubscriptionNotFound,
                    SnsInvalidTopic,
                    SnsNoAuthorization,
                    SnsTopicArnNotFound,
                    SubscriptionCategoryNotFound,
                ],
                paginated: false,
            },
            ModifyGlobalCluster {
                name: "ModifyGlobalCluster",
                method: modify_global_cluster,
                request: ModifyGlobalClusterRequest,
                response: ModifyGlobalClusterResponse,
                errors: [GlobalClusterNotFound, InvalidGlobalClusterState],
                paginated: false,
            },
            ModifyOptionGroup {
                name: "ModifyOptionGroup",
                method: modify_option_group,
                request: ModifyOptionGroupRequest,
                response: ModifyOptionGroupResponse,
                errors: [InvalidOptionGroupState, OptionGroupNotFound],
                paginated: false,
            },
            PromoteReadReplica {
                name: "PromoteReadReplica",
                method: promote_read_replica,
                request: PromoteReadReplicaRequest,
                response: PromoteReadReplicaResponse,
                errors: [InvalidDbInstanceState, DbInstanceNotFound],
                paginated: false,
            },
            PromoteReadReplicaDbCluster {
                name: "PromoteReadReplicaDBCluster",
                method: promote_read_replica_db_cluster,
                request: PromoteReadReplicaDbClusterRequest,
                response: PromoteReadReplicaDbClusterResponse,
                errors: [DbClusterNotFound, InvalidDbClusterState],
                paginated: false,
            },
            PurchaseReservedDbInstancesOffering {
                name: "PurchaseReservedDBInstancesOffering",
                method: purchase_reserved_db_instances_offering,
                request: PurchaseReservedDbInstancesOfferingRequest,
                response: PurchaseReservedDbInstancesOfferingResponse,
                errors: [
                    ReservedDbInstancesOfferingNotFound,
                    ReservedDbInstanceAlreadyExists,
                    ReservedDbInstanceQuotaExceeded,
                ],
                paginated: false,
            },
            RebootDbInstance {
                name: "RebootDBInstance",
                method: reboot_db_instance,
                request: RebootDbInstanceRequest,
                response: RebootDbInstanceResponse,
                errors: [InvalidDbInstanceState, DbInstanceNotFound],
                paginated: false,
            },
            RegisterDbProxyTargets {
                name: "RegisterDBProxyTargets",
                method: register_db_proxy_targets,
                request: RegisterDbProxyTargetsRequest,
                response: RegisterDbProxyTargetsResponse,
                errors: [
                    DbProxyNotFound,
                    DbProxyTargetGroupNotFound,
                    DbClusterNotFound,
                    DbInstanceNotFound,
                    DbProxyTargetAlreadyRegistered,
                    InvalidDbInstanceState,
                    InvalidDbClusterState,
                    InvalidDbProxyState,
                ],
                paginated: false,
            },
            RemoveFromGlobalCluster {
                name: "RemoveFromGlobalCluster",
                method: remove_from_global_cluster,
                request: RemoveFromGlobalClusterRequest,
                response: RemoveFromGlobalClusterResponse,
                errors: [GlobalClusterNotFound, InvalidGlobalClusterState, DbClusterNotFound],
                paginated: false,
            },
            RemoveRoleFromDbCluster {
                name: "RemoveRoleFromDBCluster",
                method: remove_role_from_db_cluster,
                request: RemoveRoleFromDbClusterRequest,
                response: (),
                errors: [DbClusterNotFound, DbClusterRoleNotFound, InvalidDbClusterState],
                paginated: false,
            },
            RemoveRoleFromDbInstance {
                name: "RemoveRoleFromDBInstance",
                method: remove_role_from_db_instance,
                request: RemoveRoleFromDbInstanceRequest,
                response: (),
                errors: [DbInstanceNotFound, DbInstanceRoleNotFound, InvalidDbInstanceState],
                paginated: false,
            },
            RemoveSourceIdentifierFromSubscription {
                name: "RemoveSourceIdentifierFromSubscription",
                method: remove_source_identifier_from_subscription,
                request: RemoveSourceIdentifierFromSubscriptionRequest,
                response: RemoveSourceIdentifierFromSubscriptionResponse,
                errors: [SubscriptionNotFound, SourceNotFound],
                paginated: false,
            },
            RemoveTagsFromResource {
                name: "RemoveTagsFromResource",
                method: remove_tags_from_resource,
                request: RemoveTagsFromResourceRequest,
                response: (),
                errors: [
                    DbInstanceNotFound,
                    DbSnapshotNotFound,
                    DbClusterNotFound,
                    DbProxyNotFound,
                    DbProxyTargetGroupNotFound,
                ],
                paginated: false,
            },
            ResetDbClusterParameterGroup {
                name: "ResetDBClusterParameterGroup",
                method: reset_db_cluster_parameter_group,
                request: ResetDbClusterParameterGroupRequest,
                response: ResetDbClusterParameterGroupResponse,
                errors: [InvalidDbParameterGroupState, DbParameterGroupNotFound],
                paginated: false,
            },
            ResetDbParameterGroup {
                name: "ResetDBParameterGroup",
                method: reset_db_parameter_group,
                request: ResetDbParameterGroupRequest,
                response: ResetDbParameterGroupResponse,
                errors: [InvalidDbParameterGroupState, DbParameterGroupNotFound],
                paginated: false,
            },
            RestoreDbClusterFromS3 {
                name: "RestoreDBClusterFromS3",
                method: restore_db_cluster_from_s3,
                request: RestoreDbClusterFromS3Request,
                response: RestoreDbClusterFromS3Response,
                errors: [
                    DbClusterAlreadyExists,
                    DbClusterQuotaExceeded,
                    StorageQuotaExceeded,
                    DbSubnetGroupNotFound,
                    InvalidVpcNetworkState,
                    InvalidDbClusterState,
                    InvalidDbSubnetGroupState,
                    InvalidSubnet,
                    InvalidS3Bucket,
                    DbClusterParameterGroupNotFound,
                    KmsKeyNotAccessible,
                    DbClusterNotFound,
                    DomainNotFound,
                    InsufficientStorageClusterCapacity,
                ],
                paginated: false,
            },
            RestoreDbClusterFromSnapshot {
                name: "RestoreDBClusterFromSnapshot",
                method: restore_db_cluster_from_snapshot,
                request: RestoreDbClusterFromSnapshotRequest,
                response: RestoreDbClusterFromSnapshotResponse,
                errors: [
                    DbClusterAlreadyExists,
                    DbClusterQuotaExceeded,
                    StorageQuotaExceeded,
                    DbSubnetGroupNotFound,
                    DbSnapshotNotFound,
                    DbClusterSnapshotNotFound,
                    InsufficientDbClusterCapacity,
                    InsufficientStorageClusterCapacity,
                    InvalidDbSnapshotState,
                    InvalidDbClusterSnapshotState,
                    InvalidVpcNetworkState,
                    InvalidRestore,
                    InvalidSubnet,
                    OptionGroupNotFound,
                    KmsKeyNotAccessible,
                    DomainNotFound,
                    DbClusterParameterGroupNotFound,
                ],
                paginated: false,
            },
            RestoreDbClusterToPointInTime {
                name: "RestoreDBClusterToPointInTime",
                method: restore_db_cluster_to_point_in_time,
                request: RestoreDbClusterToPointInTimeRequest,
                response: RestoreDbClusterToPointInTimeResponse,
                errors: [
                    DbClusterAlreadyExists,
                    DbClusterNotFound,
                    DbClusterQuotaExceeded,
                    DbClusterSnapshotNotFound,
                    DbSubnetGroupNotFound,
                    InsufficientDbClusterCapacity,
                    InsufficientStorageClusterCapacity,
                    InvalidDbClusterSnapshotState,
                    InvalidDbClusterState,
                    InvalidDbSnapshotState,
                    InvalidRestore,
                    InvalidSubnet,
                    InvalidVpcNetworkState,
                    KmsKeyNotAccessible,
                    OptionGroupNotFound,
                    StorageQuotaExceeded,
                    DomainNotFound,
                    DbClusterParameterGroupNotFound,
                ],
                paginated: false,
            },
            RestoreDbInstanceFromDbSnapshot {
                name: "RestoreDBInstanceFromDBSnapshot",
                method: restore_db_instance_from_db_snapshot,
                request: RestoreDbInstanceFromDbSnapshotRequest,
                response: RestoreDbInstanceFromDbSnapshotResponse,
                errors: [
                    DbInstanceAlreadyExists,
                    DbSnapshotNotFound,
                    InstanceQuotaExceeded,
                    InsufficientDbInstanceCapacity,
                    InvalidDbSnapshotState,
                    StorageQuotaExceeded,
                    InvalidVpcNetworkState,
                    InvalidRestore,
                    DbSubnetGroupNotFound,
                    DbSubnetGroupDoesNotCoverEnoughAzs,
                    InvalidSubnet,
                    ProvisionedIopsNotAvailableInAz,
                    OptionGroupNotFound,
                    StorageTypeNotSupported,
                    AuthorizationNotFound,
                    KmsKeyNotAccessible,
                    DbSecurityGroupNotFound,
                    DomainNotFound,
                    DbParameterGroupNotFound,
                    BackupPolicyNotFound,
                ],
                paginated: false,
            },
            RestoreDbInstanceFromS3 {
                name: "RestoreDBInstanceFromS3",
                method: restore_db_instance_from_s3,
                request: RestoreDbInstanceFromS3Request,
                response: RestoreDbInstanceFromS3Response,
                errors: [
                    DbInstanceAlreadyExists,
                    InsufficientDbInstanceCapacity,
                    DbParameterGroupNotFound,
                    DbSecurityGroupNotFound,
                    InstanceQuotaExceeded,
                    StorageQuotaExceeded,
                    DbSubnetGroupNotFound,
                    DbSubnetGroupDoesNotCoverEnoughAzs,
                    InvalidSubnet,
                    InvalidVpcNetworkState,
                    InvalidS3Bucket,
                    ProvisionedIopsNotAvailableInAz,
                    OptionGroupNotFound,
                    StorageTypeNotSupported,
                    AuthorizationNotFound,
                    KmsKeyNotAccessible,
                    BackupPolicyNotFound,
                ],
                paginated: false,
            },
            RestoreDbInstanceToPointInTime {
                name: "RestoreDBInstanceToPointInTime",
                method: restore_db_instance_to_point_in_time,
                request: RestoreDbInstanceToPointInTimeRequest,
                response: RestoreDbInstanceToPointInTimeResponse,
                errors: [
                    DbInstanceAlreadyExists,
                    DbInstanceNotFound,
                    InstanceQuotaExceeded,
                    InsufficientDbInstanceCapacity,
                    InvalidDbInstanceState,
                    PointInTimeRestoreNotEnabled,
                    StorageQuotaExceeded,
                    InvalidVpcNetworkState,
                    InvalidRestore,
                    DbSubnetGroupNotFound,
                    DbSubnetGroupDoesNotCoverEnoughAzs,
                    InvalidSubnet,
                    ProvisionedIopsNotAvailableInAz,
                    OptionGroupNotFound,
                    StorageTypeNotSupported,
                    AuthorizationNotFound,
                    KmsKeyNotAccessible,
                    DbSecurityGroupNotFound,
                    DomainNotFound,
                    BackupPolicyNotFound,
                    DbParameterGroupNotFound,
                    DbInstanceAutomatedBackupNotFound,
                ],
                paginated: false,
            },
            RevokeDbSecurityGroupIngress {
                name: "RevokeDBSecurityGroupIngress",
                method: revoke_db_security_group_ingress,
                request: RevokeDbSecurityGroupIngressRequest,
                response: RevokeDbSecurityGroupIngressResponse,
                errors: [
                    DbSecurityGroupNotFound,
                    AuthorizationNotFound,
                    InvalidDbSecurityGroupState,
                ],
                paginated: false,
            },
            StartActivityStream {
                name: "StartActivityStream",
                method: start_activity_stream,
                request: StartActivityStreamRequest,
                response: StartActivityStreamResponse,
                errors: [
                    InvalidDbInstanceState,
                    InvalidDbClusterState,
                    ResourceNotFound,
                    DbClusterNotFound,
                    DbInstanceNotFound,
                    KmsKeyNotAccessible,
                ],
                paginated: false,
            },
            StartDbCluster {
                name: "StartDBCluster",
                method: start_db_cluster,
                request: StartDbClusterRequest,
                response: StartDbClusterResponse,
                errors: [DbClusterNotFound, InvalidDbClusterState, InvalidDbInstanceState],
                paginated: false,
            },
            StartDbInstance {
                name: "StartDBInstance",
                method: start_db_instance,
                request: StartDbInstanceRequest,
                response: StartDbInstanceResponse,
                errors: [
                    DbInstanceNotFound,
                    InvalidDbInstanceState,
                    InsufficientDbInstanceCapacity,
                    DbSubnetGroupNotFound,
                    DbSubnetGroupDoesNotCoverEnoughAzs,
                    InvalidDbClusterState,
                    InvalidSubnet,
                    InvalidVpcNetworkState,
                    DbClusterNotFound,
                    AuthorizationNotFound,
                    KmsKeyNotAccessible,
                ],
                paginated: false,
            },
            StartExportTask {
                name: "StartExportTask",
                method: start_export_task,
                request: StartExportTaskRequest,
                response: StartExportTaskResponse,
                errors: [
                    DbSnapshotNotFound,
                    DbClusterSnapshotNotFound,
                    ExportTaskAlreadyExists,
                    InvalidS3Bucket,
                    IamRoleNotFound,
                    IamRoleMissingPermissions,
                    InvalidExportOnly,
                    KmsKeyNotAccessible,
                    InvalidExportSourceState,
                ],
                paginated: false,
            },
            StopActivityStream {
                name: "StopActivityStream",
                method: stop_activity_stream,
                request: StopActivityStreamRequest,
                response: StopActivityStreamResponse,
                errors: [
                    InvalidDbInstanceState,
                    InvalidDbClusterState,
                    ResourceNotFound,
                    DbClusterNotFound,
                    DbInstanceNotFound,
                ],
                paginated: false,
            },
            StopDbCluster {
                name: "StopDBCluster",
                method: stop_db_cluster,
                request: StopDbClusterRequest,
                response: StopDbClusterResponse,
                errors: [DbClusterNotFound, InvalidDbClusterState, InvalidDbInstanceState],
                paginated: false,
            },
            StopDbInstance {
                name: "StopDBInstance",
                method: stop_db_instance,
                request: StopDbInstanceRequest,
                response: StopDbInstanceResponse,
                errors: [
                    DbInstanceNotFound,
                    InvalidDbInstanceState,
                    DbSnapshotAlreadyExists,
                    SnapshotQuotaExceeded,
                    InvalidDbClusterState,
                ],
                paginated: false,
            },
        }
    };
}

/// A remote operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    name: &'static str,
    errors: &'static [ErrorKind],
}

impl Operation {
    /// The name of the operation, as sent to the service.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The error conditions declared by the operation.
    pub const fn errors(&self) -> &'static [ErrorKind] {
        self.errors
    }

    /// Returns true if the operation declares `kind`.
    pub fn declares(&self, kind: ErrorKind) -> bool {
        self.errors.contains(&kind)
    }
}

/// Implemented by the request of each operation.
///
/// The transport uses this trait to send any request, and to decode its
/// response.
pub trait RdsRequest: serde::Serialize + std::fmt::Debug + Send + Sync + 'static {
    /// The type returned by a successful call.
    type Response: serde::de::DeserializeOwned + Default + Send + 'static;

    /// The operation called with this request.
    const OPERATION: Operation;
}

macro_rules! registry {
    ($(
        $op:ident {
            name: $wire:literal,
            method: $method:ident,
            request: $req:ident,
            response: $resp:ty,
            errors: [$($kind:ident),* $(,)?],
            paginated: $paginated:tt,
        },
    )*) => {
        $(
            impl RdsRequest for $req {
                type Response = $resp;
                const OPERATION: Operation = Operation {
                    name: $wire,
                    errors: &[$(ErrorKind::$kind,)*],
                };
            }
        )*

        /// All the operations, sorted by name.
        pub static OPERATIONS: &[Operation] = &[$(<$req as RdsRequest>::OPERATION,)*];
    };
}

rds_operations!(registry);

/// Finds an operation by its name.
pub fn find(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|o| o.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    #[test]
    fn registry() {
        assert_eq!(OPERATIONS.len(), 130);
        let names = OPERATIONS.iter().map(|o| o.name()).collect::<HashSet<_>>();
        assert_eq!(names.len(), OPERATIONS.len());
        let mut sorted = OPERATIONS.iter().map(|o| o.name()).collect::<Vec<_>>();
        sorted.sort();
        assert!(OPERATIONS.iter().map(|o| o.name()).eq(sorted), "{OPERATIONS:?}");
    }

    #[test]
    fn errors_are_unique() {
        for op in OPERATIONS {
            let kinds = op.errors().iter().collect::<HashSet<_>>();
            assert_eq!(kinds.len(), op.errors().len(), "{op:?}");
        }
    }

    #[test]
    fn every_kind_is_declared() {
        let declared = OPERATIONS
            .iter()
            .flat_map(|o| o.errors().iter())
            .collect::<HashSet<_>>();
        for kind in ErrorKind::ALL {
            assert!(declared.contains(kind), "{kind} is not declared by any operation");
        }
    }

    #[test_case(DeleteDbInstanceRequest::OPERATION, "DeleteDBInstance")]
    #[test_case(DescribeDbInstancesRequest::OPERATION, "DescribeDBInstances")]
    #[test_case(AddTagsToResourceRequest::OPERATION, "AddTagsToResource")]
    #[test_case(ModifyCurrentDbClusterCapacityRequest::OPERATION, "ModifyCurrentDBClusterCapacity")]
    #[test_case(RemoveFromGlobalClusterRequest::OPERATION, "RemoveFromGlobalCluster")]
    fn request_to_operation(operation: Operation, name: &str) {
        assert_eq!(operation.name(), name);
        assert_eq!(find(name), Some(&operation));
    }

    #[test]
    fn find_unknown() {
        assert_eq!(find("DescribeDbInstances"), None);
        assert_eq!(find(""), None);
    }

    #[test]
    fn declared_errors() {
        let op = DeleteDbInstanceRequest::OPERATION;
        assert_eq!(
            op.errors(),
            &[
                ErrorKind::DbInstanceNotFound,
                ErrorKind::InvalidDbInstanceState,
                ErrorKind::DbSnapshotAlreadyExists,
                ErrorKind::SnapshotQuotaExceeded,
                ErrorKind::InvalidDbClusterState,
                ErrorKind::DbInstanceAutomatedBackupQuotaExceeded,
            ]
        );
        assert!(!op.declares(ErrorKind::DbClusterNotFound));

        assert!(DescribeDbEngineVersionsRequest::OPERATION.errors().is_empty());
        assert!(DescribeEventsRequest::OPERATION.errors().is_empty());
    }

    #[test]
    fn void_operations() {
        static_assertions::assert_type_eq_all!(
            <AddTagsToResourceRequest as RdsRequest>::Response,
            <DeleteDbParameterGroupRequest as RdsRequest>::Response,
            <RemoveRoleFromDbInstanceRequest as RdsRequest>::Response,
            ()
        );
        static_assertions::assert_type_eq_all!(
            <DescribeDbInstancesRequest as RdsRequest>::Response,
            DescribeDbInstancesResponse
        );
    }
}
