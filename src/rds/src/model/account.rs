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

//! Account-wide resources: quotas, certificates, regions, maintenance, tags,
//! custom availability zones, installation media and export tasks.

use super::*;

message! {
    pub struct AccountQuota {
        "AccountQuotaName" => account_quota_name: opt String,
        "Used" => used: opt i64,
        "Max" => max: opt i64,
    }
}

message! {
    #[builder(DescribeAccountAttributes)]
    pub struct DescribeAccountAttributesRequest {}
}

message! {
    pub struct DescribeAccountAttributesResponse {
        "AccountQuotas" => account_quotas: list AccountQuota,
    }
}

message! {
    /// A CA certificate used to validate TLS connections to instances.
    pub struct Certificate {
        "CertificateIdentifier" => certificate_identifier: opt String,
        "CertificateType" => certificate_type: opt String,
        "Thumbprint" => thumbprint: opt String,
        "ValidFrom" => valid_from: opt Timestamp,
        "ValidTill" => valid_till: opt Timestamp,
        "CertificateArn" => certificate_arn: opt String,
        "CustomerOverride" => customer_override: opt bool,
        "CustomerOverrideValidTill" => customer_override_valid_till: opt Timestamp,
    }
}

message! {
    #[builder(DescribeCertificates)]
    pub struct DescribeCertificatesRequest {
        "CertificateIdentifier" => certificate_identifier: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeCertificatesResponse {
        "Certificates" => certificates: list Certificate,
        "Marker" => marker: opt String,
    }
}

pageable!(DescribeCertificatesResponse, certificates: Certificate);

message! {
    /// Overrides the default certificate for new instances.
    ///
    /// Set `remove_customer_override` to restore the system default.
    #[builder(ModifyCertificates)]
    pub struct ModifyCertificatesRequest {
        "CertificateIdentifier" => certificate_identifier: opt String,
        "RemoveCustomerOverride" => remove_customer_override: opt bool,
    }
}

message! {
    pub struct ModifyCertificatesResponse {
        "Certificate" => certificate: opt Certificate,
    }
}

message! {
    pub struct SourceRegion {
        "RegionName" => region_name: opt String,
        "Endpoint" => endpoint: opt String,
        "Status" => status: opt String,
    }
}

message! {
    #[builder(DescribeSourceRegions)]
    pub struct DescribeSourceRegionsRequest {
        "RegionName" => region_name: opt String,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
        "Filters" => filters: list Filter,
    }
}

message! {
    pub struct DescribeSourceRegionsResponse {
        "Marker" => marker: opt String,
        "SourceRegions" => source_regions: list SourceRegion,
    }
}

pageable!(DescribeSourceRegionsResponse, source_regions: SourceRegion);

message! {
    pub struct PendingMaintenanceAction {
        /// `system-update`, `db-upgrade`, `hardware-maintenance`, or
        /// `ca-certificate-rotation`.
        "Action" => action: opt String,
        "AutoAppliedAfterDate" => auto_applied_after_date: opt Timestamp,
        "ForcedApplyDate" => forced_apply_date: opt Timestamp,
        "OptInStatus" => opt_in_status: opt String,
        "CurrentApplyDate" => current_apply_date: opt Timestamp,
        "Description" => description: opt String,
    }
}

message! {
    pub struct ResourcePendingMaintenanceActions {
        "ResourceIdentifier" => resource_identifier: opt String,
        "PendingMaintenanceActionDetails" => pending_maintenance_action_details: list PendingMaintenanceAction,
    }
}

message! {
    #[builder(ApplyPendingMaintenanceAction)]
    pub struct ApplyPendingMaintenanceActionRequest {
        /// The ARN of the resource.
        "ResourceIdentifier" => resource_identifier: req String,
        "ApplyAction" => apply_action: req String,
        /// `immediate`, `next-maintenance`, or `undo-opt-in`.
        "OptInType" => opt_in_type: req String,
    }
}

message! {
    pub struct ApplyPendingMaintenanceActionResponse {
        "ResourcePendingMaintenanceActions" => resource_pending_maintenance_actions: opt ResourcePendingMaintenanceActions,
    }
}

message! {
    #[builder(DescribePendingMaintenanceActions)]
    pub struct DescribePendingMaintenanceActionsRequest {
        "ResourceIdentifier" => resource_identifier: opt String,
        "Filters" => filters: list Filter,
        "Marker" => marker: opt String,
        "MaxRecords" => max_records: opt i32,
    }
}

message! {
    pub struct DescribePendingMaintenanceActionsResponse {
        "PendingMaintenanceActions" => pending_maintenance_actions: list ResourcePendingMaintenanceActions,
        "Marker" => marker: opt String,
    }
}

pageable!(
    DescribePendingMaintenanceActionsResponse,
    pending_maintenance_actions: ResourcePendingMaintenanceActions
);

message! {
    /// Adds tags to a resource, replacing the values of existing keys.
    ///
    /// # Example
    /// ```
    /// # use rds_admin::model::{AddTagsToResourceRequest, Tag};
    /// let request = AddTagsToResourceRequest::new()
    ///     .set_resource_name("arn:aws:rds:us-east-1:123456789012:db:my-db")
    ///     .set_tags([Tag::new().set_key("team").set_value("storage")]);
    /// assert_eq!(request.tags.len(), 1);
    /// ```
    #[builder(AddTagsToResource)]
    pub struct AddTagsToResourceRequest {
        /// The ARN of the resource.
        "ResourceName" => resource_name: req String,
        "Tags" => tags: list Tag,
    }
}

message! {
    #[builder(RemoveTagsFromResource)]
    pub struct RemoveTagsFromResourceRequest {
        "ResourceName" => resource_name: req String,
        "TagKeys" => tag_keys: list String,
    }
}

message! {
    #[builder(ListTagsForResource)]
    pub struct ListTagsForResourceRequest {
        "ResourceName" => resource_name: req String,
        "Filters" => filters: list Filter,
    }
}

message! {
    pub struct ListTagsForResourceResponse {
        "TagList" => tag_list: list Tag,
    }
}

message! {
    /// The VPN connecting an on-premises custom availability zone.
    pub struct VpnDetails {
        "VpnId" => vpn_id: opt String,
        "VpnTunnelOriginatorIP" => vpn_tunnel_originator_ip: opt String,
        "VpnGatewayIp" => vpn_gateway_ip: opt String,
        "VpnPSK" => vpn_psk: opt String,
        "VpnName" => vpn_name: opt String,
        "VpnState" => vpn_state: opt String,
    }
}

message! {
    /// An on-premises availability zone for RDS on VMware.
    pub struct CustomAvailabilityZone {
        "CustomAvailabilityZoneId" => custom_availability_zone_id: opt String,
        "CustomAvailabilityZoneName" => custom_availability_zone_name: opt String,
        "CustomAvailabilityZoneStatus" => custom_availability_zone_status: opt String,
        "VpnDetails" => vpn_details: opt VpnDetails,
    }
}

message! {
    #[builder(CreateCustomAvailabilityZone)]
    pub struct CreateCustomAvailabilityZoneRequest {
        "CustomAvailabilityZoneName" => custom_availability_zone_name: req String,
        "ExistingVpnId" => existing_vpn_id: opt String,
        "NewVpnTunnelName" => new_vpn_tunnel_name: opt String,
        "VpnTunnelOriginatorIP" => vpn_tunnel_originator_ip: opt String,
    }
}

message! {
    pub struct CreateCustomAvailabilityZoneResponse {
        "CustomAvailabilityZone" => custom_availability_zone: opt CustomAvailabilityZone,
    }
}

message! {
    #[builder(DeleteCustomAvailabilityZone)]
    pub struct DeleteCustomAvailabilityZoneRequest {
        "CustomAvailabilityZoneId" => custom_availability_zone_id: req String,
    }
}

message! {
    pub struct DeleteCustomAvailabilityZoneResponse {
        "CustomAvailabilityZone" => custom_availability_zone: opt CustomAvailabilityZone,
    }
}

message! {
    #[builder(DescribeCustomAvailabilityZones)]
    pub struct DescribeCustomAvailabilityZonesRequest {
        "CustomAvailabilityZoneId" => custom_availability_zone_id: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeCustomAvailabilityZonesResponse {
        "Marker" => marker: opt String,
        "CustomAvailabilityZones" => custom_availability_zones: list CustomAvailabilityZone,
    }
}

pageable!(
    DescribeCustomAvailabilityZonesResponse,
    custom_availability_zones: CustomAvailabilityZone
);

message! {
    pub struct InstallationMediaFailureCause {
        "Message" => message: opt String,
    }
}

message! {
    /// Engine installation media imported into a custom availability zone.
    pub struct InstallationMedia {
        "InstallationMediaId" => installation_media_id: opt String,
        "CustomAvailabilityZoneId" => custom_availability_zone_id: opt String,
        "Engine" => engine: opt String,
        "EngineVersion" => engine_version: opt String,
        "EngineInstallationMediaPath" => engine_installation_media_path: opt String,
        "OSInstallationMediaPath" => os_installation_media_path: opt String,
        "Status" => status: opt String,
        "FailureCause" => failure_cause: opt InstallationMediaFailureCause,
    }
}

message! {
    #[builder(ImportInstallationMedia)]
    pub struct ImportInstallationMediaRequest {
        "CustomAvailabilityZoneId" => custom_availability_zone_id: req String,
        "Engine" => engine: req String,
        "EngineVersion" => engine_version: req String,
        "EngineInstallationMediaPath" => engine_installation_media_path: req String,
        "OSInstallationMediaPath" => os_installation_media_path: req String,
    }
}

message! {
    /// The service returns the imported media at the top level.
    pub struct ImportInstallationMediaResponse {
        "InstallationMediaId" => installation_media_id: opt String,
        "CustomAvailabilityZoneId" => custom_availability_zone_id: opt String,
        "Engine" => engine: opt String,
        "EngineVersion" => engine_version: opt String,
        "EngineInstallationMediaPath" => engine_installation_media_path: opt String,
        "OSInstallationMediaPath" => os_installation_media_path: opt String,
        "Status" => status: opt String,
        "FailureCause" => failure_cause: opt InstallationMediaFailureCause,
    }
}

message! {
    #[builder(DeleteInstallationMedia)]
    pub struct DeleteInstallationMediaRequest {
        "InstallationMediaId" => installation_media_id: req String,
    }
}

message! {
    pub struct DeleteInstallationMediaResponse {
        "InstallationMediaId" => installation_media_id: opt String,
        "CustomAvailabilityZoneId" => custom_availability_zone_id: opt String,
        "Engine" => engine: opt String,
        "EngineVersion" => engine_version: opt String,
        "EngineInstallationMediaPath" => engine_installation_media_path: opt String,
        "OSInstallationMediaPath" => os_installation_media_path: opt String,
        "Status" => status: opt String,
        "FailureCause" => failure_cause: opt InstallationMediaFailureCause,
    }
}

message! {
    #[builder(DescribeInstallationMedia)]
    pub struct DescribeInstallationMediaRequest {
        "InstallationMediaId" => installation_media_id: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeInstallationMediaResponse {
        "Marker" => marker: opt String,
        "InstallationMedia" => installation_media: list InstallationMedia,
    }
}

pageable!(DescribeInstallationMediaResponse, installation_media: InstallationMedia);

message! {
    /// A snapshot export to Amazon S3.
    pub struct ExportTask {
        "ExportTaskIdentifier" => export_task_identifier: opt String,
        "SourceArn" => source_arn: opt String,
        "ExportOnly" => export_only: list String,
        "SnapshotTime" => snapshot_time: opt Timestamp,
        "TaskStartTime" => task_start_time: opt Timestamp,
        "TaskEndTime" => task_end_time: opt Timestamp,
        "S3Bucket" => s3_bucket: opt String,
        "S3Prefix" => s3_prefix: opt String,
        "IamRoleArn" => iam_role_arn: opt String,
        "KmsKeyId" => kms_key_id: opt String,
        "Status" => status: opt String,
        "PercentProgress" => percent_progress: opt i32,
        "TotalExtractedDataInGB" => total_extracted_data_in_gb: opt i32,
        "FailureCause" => failure_cause: opt String,
        "WarningMessage" => warning_message: opt String,
    }
}

message! {
    /// Exports a snapshot to Amazon S3 in Apache Parquet format.
    #[builder(StartExportTask)]
    pub struct StartExportTaskRequest {
        "ExportTaskIdentifier" => export_task_identifier: req String,
        /// The ARN of the snapshot to export.
        "SourceArn" => source_arn: req String,
        "S3BucketName" => s3_bucket_name: req String,
        "IamRoleArn" => iam_role_arn: req String,
        "KmsKeyId" => kms_key_id: req String,
        "S3Prefix" => s3_prefix: opt String,
        /// Databases, schemas, or tables to export. Everything if empty.
        "ExportOnly" => export_only: list String,
    }
}

message! {
    /// The service returns the export task at the top level.
    pub struct StartExportTaskResponse {
        "ExportTaskIdentifier" => export_task_identifier: opt String,
        "SourceArn" => source_arn: opt String,
        "ExportOnly" => export_only: list String,
        "SnapshotTime" => snapshot_time: opt Timestamp,
        "TaskStartTime" => task_start_time: opt Timestamp,
        "TaskEndTime" => task_end_time: opt Timestamp,
        "S3Bucket" => s3_bucket: opt String,
        "S3Prefix" => s3_prefix: opt String,
        "IamRoleArn" => iam_role_arn: opt String,
        "KmsKeyId" => kms_key_id: opt String,
        "Status" => status: opt String,
        "PercentProgress" => percent_progress: opt i32,
        "TotalExtractedDataInGB" => total_extracted_data_in_gb: opt i32,
        "FailureCause" => failure_cause: opt String,
        "WarningMessage" => warning_message: opt String,
    }
}

message! {
    #[builder(CancelExportTask)]
    pub struct CancelExportTaskRequest {
        "ExportTaskIdentifier" => export_task_identifier: req String,
    }
}

message! {
    pub struct CancelExportTaskResponse {
        "ExportTaskIdentifier" => export_task_identifier: opt String,
        "SourceArn" => source_arn: opt String,
        "ExportOnly" => export_only: list String,
        "SnapshotTime" => snapshot_time: opt Timestamp,
        "TaskStartTime" => task_start_time: opt Timestamp,
        "TaskEndTime" => task_end_time: opt Timestamp,
        "S3Bucket" => s3_bucket: opt String,
        "S3Prefix" => s3_prefix: opt String,
        "IamRoleArn" => iam_role_arn: opt String,
        "KmsKeyId" => kms_key_id: opt String,
        "Status" => status: opt String,
        "PercentProgress" => percent_progress: opt i32,
        "TotalExtractedDataInGB" => total_extracted_data_in_gb: opt i32,
        "FailureCause" => failure_cause: opt String,
        "WarningMessage" => warning_message: opt String,
    }
}

message! {
    #[builder(DescribeExportTasks)]
    pub struct DescribeExportTasksRequest {
        "ExportTaskIdentifier" => export_task_identifier: opt String,
        "SourceArn" => source_arn: opt String,
        "Filters" => filters: list Filter,
        "Marker" => marker: opt String,
        "MaxRecords" => max_records: opt i32,
    }
}

message! {
    pub struct DescribeExportTasksResponse {
        "Marker" => marker: opt String,
        "ExportTasks" => export_tasks: list ExportTask,
    }
}

pageable!(DescribeExportTasksResponse, export_tasks: ExportTask);

#[cfg(test)]
mod tests {
    use super::*;
    use gax::paginator::PageableResponse;
    use serde_json::json;

    #[test]
    fn empty_request() -> anyhow::Result<()> {
        let got = serde_json::to_value(DescribeAccountAttributesRequest::new())?;
        assert_eq!(got, json!({}));
        Ok(())
    }

    #[test]
    fn tags() -> anyhow::Result<()> {
        let request = RemoveTagsFromResourceRequest::new()
            .set_resource_name("arn:aws:rds:us-east-1:123456789012:db:my-db")
            .set_tag_keys(["team", "env"]);
        let got = serde_json::to_value(&request)?;
        let want = json!({
            "ResourceName": "arn:aws:rds:us-east-1:123456789012:db:my-db",
            "TagKeys": ["team", "env"],
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn export_task_flat_response() -> anyhow::Result<()> {
        let input = json!({
            "ExportTaskIdentifier": "my-export",
            "Status": "STARTING",
            "PercentProgress": 0,
            "TotalExtractedDataInGB": 0,
        });
        let got = serde_json::from_value::<StartExportTaskResponse>(input)?;
        assert_eq!(got.export_task_identifier.as_deref(), Some("my-export"));
        assert_eq!(got.status.as_deref(), Some("STARTING"));
        assert_eq!(got.percent_progress, Some(0));
        Ok(())
    }

    #[test]
    fn maintenance_pages() -> anyhow::Result<()> {
        let response = serde_json::from_value::<DescribePendingMaintenanceActionsResponse>(json!({
            "PendingMaintenanceActions": [{
                "ResourceIdentifier": "arn:aws:rds:us-east-1:123456789012:db:my-db",
                "PendingMaintenanceActionDetails": [{"Action": "system-update"}],
            }],
        }))?;
        assert_eq!(response.next_page_token(), "");
        let items = response.items();
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].pending_maintenance_action_details[0].action.as_deref(),
            Some("system-update")
        );
        Ok(())
    }
}
