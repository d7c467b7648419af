//! GraphQL documents sent by [`ApitoClient`](crate::ApitoClient).
//!
//! Field names must match the Apito schema exactly.

/// A named GraphQL document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    /// Operation name, used in logs.
    pub name: &'static str,
    /// The GraphQL document.
    pub document: &'static str,
}

/// Fetches one document by model and id.
pub const GET_SINGLE_DATA: Operation = Operation {
    name: "GetSingleData",
    document: r"query GetSingleData($model: String!, $_id: String!, $single_page_data: Boolean) {
  getSingleData(model: $model, _id: $_id, single_page_data: $single_page_data) {
    _key
    id
    data
    meta {
      created_at
      updated_at
      status
      revision
      revision_at
      root_revision_id
    }
    expire_at
    relation_doc_id
    type
  }
}",
};

/// Searches documents of a model.
pub const GET_MODEL_DATA: Operation = Operation {
    name: "GetModelData",
    document: r"query GetModelData($model: String!, $page: Int, $limit: Int, $where: JSON, $search: String) {
  getModelData(model: $model, page: $page, limit: $limit, where: $where, search: $search) {
    results {
      _key
      id
      data
      meta {
        created_at
        updated_at
        status
        revision
        revision_at
        root_revision_id
      }
      expire_at
      relation_doc_id
      type
    }
    count
  }
}",
};

/// Searches documents reachable through a connection.
pub const GET_RELATION_DOCUMENTS: Operation = Operation {
    name: "GetRelationDocuments",
    document: r"query GetRelationDocuments($model: String!, $connection: JSON, $page: Int, $limit: Int, $where: JSON, $search: String) {
  getModelData(model: $model, connection: $connection, page: $page, limit: $limit, where: $where, search: $search) {
    results {
      _key
      id
      data
      meta {
        created_at
        updated_at
        status
        revision
        revision_at
        root_revision_id
      }
      expire_at
      relation_doc_id
      type
    }
    count
  }
}",
};

/// Creates or updates a document.
pub const UPSERT_MODEL_DATA: Operation = Operation {
    name: "UpsertModelData",
    document: r"mutation UpsertModelData($model_name: String!, $_id: String, $payload: JSON!, $connect: JSON, $disconnect: JSON, $single_page_data: Boolean, $force_update: Boolean) {
  upsertModelData(model_name: $model_name, _id: $_id, payload: $payload, connect: $connect, disconnect: $disconnect, single_page_data: $single_page_data, force_update: $force_update) {
    _key
    id
    data
    meta {
      created_at
      updated_at
      status
      revision
      revision_at
      root_revision_id
    }
    expire_at
    relation_doc_id
    type
  }
}",
};

/// Deletes a document.
pub const DELETE_MODEL_DATA: Operation = Operation {
    name: "DeleteModelData",
    document: r"mutation DeleteModelData($model_name: String!, $_id: String!) {
  deleteModelData(model_name: $model_name, _id: $_id) {
    id
  }
}",
};

/// Exchanges a token for a tenant-scoped token.
pub const GENERATE_TENANT_TOKEN: Operation = Operation {
    name: "GenerateTenantToken",
    document: r"mutation GenerateTenantToken($token: String!) {
  generateTenantToken(token: $token) {
    token
  }
}",
};

/// Backend diagnostics.
pub const DEBUG: Operation = Operation {
    name: "Debug",
    document: r"query Debug($stage: String!, $data: JSON) {
  debug(stage: $stage, data: $data)
}",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_select_their_root_field() {
        let cases = [
            (GET_SINGLE_DATA, "getSingleData("),
            (GET_MODEL_DATA, "getModelData("),
            (GET_RELATION_DOCUMENTS, "getModelData("),
            (UPSERT_MODEL_DATA, "upsertModelData("),
            (DELETE_MODEL_DATA, "deleteModelData("),
            (GENERATE_TENANT_TOKEN, "generateTenantToken("),
            (DEBUG, "debug("),
        ];

        for (operation, field) in cases {
            assert!(
                operation.document.contains(field),
                "{} should select {field}",
                operation.name
            );
            assert!(operation.document.contains(operation.name));
        }
    }

    #[test]
    fn test_relation_query_passes_connection() {
        assert!(GET_RELATION_DOCUMENTS
            .document
            .contains("connection: $connection"));
    }
}
